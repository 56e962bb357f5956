//! Shared test utilities for headless egui frames

use egui::{Color32, Context, FullOutput, Pos2, RawInput, Rect, Shape};

// ============================================================================
// Frames
// ============================================================================

/// Run `frames` frames on one context and return the last output.
///
/// A new window spends its first frame in an invisible sizing pass, so at
/// least two frames are needed before its contents are painted.
pub fn run_frames(ctx: &Context, frames: usize, mut run_ui: impl FnMut(&Context)) -> FullOutput {
    let mut output = ctx.run(RawInput::default(), &mut run_ui);
    for _ in 1..frames {
        output = ctx.run(RawInput::default(), &mut run_ui);
    }
    output
}

/// Hover, press and release the primary button at `pos` over three frames
pub fn click_at(ctx: &Context, pos: Pos2, mut run_ui: impl FnMut(&Context)) -> FullOutput {
    let button = |pressed| egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    };

    let frames = [
        vec![egui::Event::PointerMoved(pos)],
        vec![button(true)],
        vec![button(false)],
    ];

    let mut output = FullOutput::default();
    for events in frames {
        let input = RawInput {
            events,
            ..Default::default()
        };
        output = ctx.run(input, &mut run_ui);
    }
    output
}

// ============================================================================
// Painted text
// ============================================================================

/// A piece of text painted during a frame
#[derive(Debug, Clone)]
pub struct PaintedText {
    pub text: String,
    /// Explicit color of the text; `Color32::PLACEHOLDER` when the style color applies
    pub color: Color32,
    pub rect: Rect,
}

/// Every text shape of a frame, in paint order
pub fn painted_texts(output: &FullOutput) -> Vec<PaintedText> {
    let mut texts = Vec::new();
    for clipped in &output.shapes {
        collect_texts(&clipped.shape, &mut texts);
    }
    texts
}

/// Just the strings of [`painted_texts`]
pub fn painted_strings(output: &FullOutput) -> Vec<String> {
    painted_texts(output).into_iter().map(|t| t.text).collect()
}

fn collect_texts(shape: &Shape, texts: &mut Vec<PaintedText>) {
    match shape {
        Shape::Vec(shapes) => {
            for shape in shapes {
                collect_texts(shape, texts);
            }
        }
        Shape::Text(text) => texts.push(PaintedText {
            text: text.galley.text().to_string(),
            color: text
                .galley
                .job
                .sections
                .first()
                .map_or(Color32::PLACEHOLDER, |s| s.format.color),
            rect: Rect::from_min_size(text.pos, text.galley.size()),
        }),
        _ => {}
    }
}

/// The string painted right after `label`, if any
pub fn text_after<'a>(texts: &'a [String], label: &str) -> Option<&'a str> {
    let index = texts.iter().position(|t| t == label)?;
    texts.get(index + 1).map(String::as_str)
}

/// Position of `label` in `texts`, panicking with the full list when missing
pub fn position_of(texts: &[String], label: &str) -> usize {
    texts
        .iter()
        .position(|t| t == label)
        .unwrap_or_else(|| panic!("'{label}' not painted; got {texts:?}"))
}
