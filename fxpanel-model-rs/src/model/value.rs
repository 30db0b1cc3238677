/// A single stored parameter value.
///
/// Each key keeps the same variant for the whole session: dials store
/// [`Int`](ParamValue::Int), buttons [`Bool`](ParamValue::Bool), and the
/// option selectors [`Index`](ParamValue::Index). Readers coerce rather
/// than reject a mismatched variant so a hand-written initial store with
/// `Int(2)` for a selector still behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParamValue {
    Int(i32),
    Bool(bool),
    Index(i32),
}

impl ParamValue {
    /// Integer view: booleans read as 0/1.
    pub fn as_int(self) -> i32 {
        match self {
            ParamValue::Int(v) | ParamValue::Index(v) => v,
            ParamValue::Bool(b) => b as i32,
        }
    }

    /// Boolean view: any non-zero number reads as `true`.
    pub fn as_bool(self) -> bool {
        match self {
            ParamValue::Bool(b) => b,
            ParamValue::Int(v) | ParamValue::Index(v) => v != 0,
        }
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}
