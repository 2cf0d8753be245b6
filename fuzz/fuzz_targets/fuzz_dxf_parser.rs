#![no_main]

use dxf_shape_editor::{parse_dxf, AppController, AppIntent, AppState};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    for draft in parse_dxf(content) {
        assert!(draft.points.len() >= 2);
    }

    // Laden darf nie einen Invariantenfehler liefern
    let mut state = AppState::new();
    let mut controller = AppController::new();
    let result = controller.handle_intent(
        &mut state,
        AppIntent::DxfContentLoaded {
            source_name: "fuzz.dxf".into(),
            content: content.to_owned(),
        },
    );
    assert!(result.is_ok());
    assert!(state.history.len() <= 2);
});
