//! The bundled chorus editor: four pages, twelve parameters.

use fxpanel::{Control, Effect, ModelError, Page, ParamStore, ParamValue};

const MODES: &[&str] = &["A", "B", "C"];
const WAVES: &[&str] = &["SINE", "TRI", "SAW", "SQR"];
const FILTERS: &[&str] = &["LP6", "HP6", "BP6", "NOTCH", "LADDER", "PULTEC"];
const DIVISIONS: &[&str] = &["1/1", "1/2", "1/4", "1/8", "1/16"];

/// Initial parameter values.
fn initial_params() -> Result<ParamStore, ModelError> {
    ParamStore::from_pairs(&[
        ("rate", ParamValue::Int(0)),
        ("mode", ParamValue::Index(0)),
        ("sync", ParamValue::Bool(false)),
        ("wave", ParamValue::Index(0)),
        ("filter", ParamValue::Index(0)),
        ("tone", ParamValue::Int(55)),
        ("pre", ParamValue::Int(10)),
        ("post", ParamValue::Int(70)),
        ("dry", ParamValue::Int(90)),
        ("detune", ParamValue::Int(0)),
        ("bpm", ParamValue::Int(120)),
        ("div", ParamValue::Index(2)),
    ])
}

/// Build the chorus effect.
///
/// # Errors
///
/// Any [`ModelError`] from page or store construction. The layout below
/// is fixed, so an error here means a capacity constant was lowered.
pub fn build_chorus() -> Result<Effect, ModelError> {
    let pages = [
        Page::new(
            "MAIN",
            &[
                Control::dial("rate", "RATE", -12, 12).wrapping(),
                Control::switch("mode", "MODE", MODES),
                Control::button("sync", "SYNC"),
            ],
        )?,
        Page::new(
            "MOD",
            &[
                Control::enum_select("wave", "WAVE", WAVES),
                Control::enum_select("filter", "FILTER", FILTERS),
                Control::dial("tone", "TONE", 0, 100),
            ],
        )?,
        Page::new(
            "LEVEL",
            &[
                Control::dial("pre", "PRE", 0, 100),
                Control::dial("post", "POST", 0, 100),
                Control::dial("dry", "DRY", 0, 100),
            ],
        )?,
        Page::new(
            "TUNE",
            &[
                Control::dial("detune", "DETUNE", -12, 12),
                Control::dial("bpm", "BPM", 30, 300).with_step(5),
                Control::text_select("div", "DIV", DIVISIONS),
            ],
        )?,
    ];

    Effect::new("CHORUS", &pages, initial_params()?)
}
