use kanal::AsyncReceiver;
use lexi_core::state::LookupState;
use lexi_core::types::{AppEvent, Definition};

/// Terminal render loop
pub async fn ui_loop(ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    while let Ok(event) = ui_rx.recv().await {
        match event {
            AppEvent::ShowDefinition(def) => println!("{}", format_definition(&def)),
            AppEvent::ShowError(message) => println!("{message}"),
            _ => {}
        }
    }

    Ok(())
}

/// One-shot render of a finished lookup
pub fn render_state(state: &LookupState) {
    match state {
        LookupState::Success(def) => println!("{}", format_definition(def)),
        LookupState::Failure(message) => println!("{message}"),
        LookupState::Idle | LookupState::Loading => {}
    }
}

/// Headword, optional phonetic, then one `partOfSpeech: definition` line
/// per meaning. An empty meanings list renders no meaning lines.
pub fn format_definition(def: &Definition) -> String {
    let mut out = def.word.clone();

    if let Some(phonetic) = &def.phonetic {
        out.push('\n');
        out.push_str(phonetic);
    }

    for meaning in &def.meanings {
        out.push('\n');
        out.push_str(&meaning.part_of_speech);
        out.push_str(": ");
        out.push_str(&meaning.definition);
    }

    out
}
