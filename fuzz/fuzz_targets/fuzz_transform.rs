#![no_main]

//! Fuzz target for the markdown transformer:
//! it must never panic, every extracted block must be restored, and no
//! placeholder token may appear that the input did not already spell out.

use libfuzzer_sys::fuzz_target;
use docsmith_lib::pipeline::Pipeline;
use docsmith_lib::protected::{PLACEHOLDER_PREFIX, SHIELD, shield, unshield};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    // Skip extreme inputs
    if content.len() > 50_000 {
        return;
    }

    assert_eq!(unshield(&shield(content)), content);

    let document = Pipeline::default().render_document(content);

    for block in document.blocks.iter() {
        assert!(document.html.contains(&block.html), "block lost for input {content:?}");
    }
    assert!(
        document.html.matches(PLACEHOLDER_PREFIX).count() <= content.matches(PLACEHOLDER_PREFIX).count(),
        "placeholder leaked for input {content:?}"
    );
    assert_eq!(
        document.html.matches(SHIELD).count(),
        content.matches(SHIELD).count(),
        "escape character leaked for input {content:?}"
    );
});
