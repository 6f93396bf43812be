use crate::application::dialog::{Input, Keyboard, Reply};

/// Maps one input line to a conversation event.
///
/// `/start` becomes the restart command and a bare `promotion_<n>` line
/// stands in for pressing the matching inline button; everything else is
/// free text.
pub fn parse_line(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed == "/start" {
        Input::Start
    } else if trimmed.starts_with("promotion_") {
        Input::Callback(trimmed.to_string())
    } else {
        Input::Text(trimmed.to_string())
    }
}

/// Renders a reply for a line-oriented terminal, button sets included.
pub fn render(reply: &Reply) -> String {
    match &reply.keyboard {
        None => reply.text.clone(),
        Some(Keyboard::Buttons(buttons)) => {
            let row = buttons
                .iter()
                .map(|label| format!("[{label}]"))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}\n{row}", reply.text)
        }
        Some(Keyboard::Inline(entries)) => {
            let mut out = reply.text.clone();
            for (label, token) in entries {
                out.push_str(&format!("\n[{label}] -> {token}"));
            }
            out
        }
    }
}
