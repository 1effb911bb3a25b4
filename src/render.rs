//! Docblock rendering
//!
//! Turns a populated [`Tokens`] model into the final comment text. Rendering
//! is a pure function: four ordered stages (description, parameter tags,
//! return tag, var tag) appended to a line list, assembled with the
//! configured delimiters and stripped of trailing whitespace.
//!
//! Column widths are computed per call, never hard-coded: parameter names,
//! types and descriptions line up across heterogeneous rows, and the return
//! description lands on the same column as the parameter descriptions.

use crate::settings::{Settings, TagLayout};
use crate::tokens::{Category, Tokens};

/// Tab-stop counter local to one render call
///
/// Every region of the output meant for interactive completion is wrapped
/// as `${n:text}`; the counter starts at 1 and resets per call, so two
/// renders of the same tokens are byte-identical.
struct TabStops {
    next: usize,
}

impl TabStops {
    fn new() -> Self {
        Self { next: 1 }
    }

    fn placeholder(&mut self, text: &str) -> String {
        let n = self.next;
        self.next += 1;
        format!("${{{}:{}}}", n, text)
    }
}

/// Render a docblock for the given token model
pub fn render(tokens: &Tokens, settings: &Settings) -> String {
    let mut stops = TabStops::new();
    let mut lines: Vec<String> = Vec::new();

    lines.push(stops.placeholder(&format!("[{} description]", escape(&tokens.name))));
    render_param_tags(tokens, settings, &mut stops, &mut lines);
    render_return_tag(tokens, settings, &mut stops, &mut lines);
    render_var_tag(tokens, settings, &mut stops, &mut lines);

    assemble(&lines, settings)
}

/// Render the minimal block used when nothing could be documented
///
/// Open delimiter, one blank comment line, close delimiter. Never fails.
pub fn render_empty(settings: &Settings) -> String {
    assemble(&[String::new()], settings)
}

fn render_param_tags(
    tokens: &Tokens,
    settings: &Settings,
    stops: &mut TabStops,
    lines: &mut Vec<String>,
) {
    if tokens.category != Category::Function || tokens.params.is_empty() {
        return;
    }

    let gap = settings.column_spacing;
    let has_type = tokens.params.iter().any(|p| p.ty.is_some());
    let name_width = name_column_width(tokens);
    let type_width = type_column_width(tokens, settings);

    lines.push(String::new());

    for param in &tokens.params {
        let effective_type_len = param
            .ty
            .as_deref()
            .map_or_else(|| settings.type_placeholder.chars().count(), |t| {
                t.chars().count()
            });
        // With no types anywhere the type column collapses to a single gap.
        let type_pad = if has_type {
            (gap + type_width).saturating_sub(effective_type_len).max(1)
        } else {
            gap.max(1)
        };
        let name_pad = gap + name_width - param.name.chars().count();

        let name = escape(&param.name);
        let ty = match &param.ty {
            Some(t) => stops.placeholder(t),
            None => stops.placeholder(&settings.type_placeholder),
        };
        let desc = stops.placeholder(&format!("[{} description]", name));

        match settings.tag_layout {
            TagLayout::Standard => lines.push(format!(
                "@param{} {}{}{}{}{}",
                " ".repeat(gap),
                ty,
                " ".repeat(type_pad),
                name,
                " ".repeat(name_pad),
                desc
            )),
            TagLayout::Compact => lines.push(format!(
                "@param {} {}{}{}  {}",
                ty, name, settings.eos, settings.line_prefix, desc
            )),
        }
    }
}

fn render_return_tag(
    tokens: &Tokens,
    settings: &Settings,
    stops: &mut TabStops,
    lines: &mut Vec<String>,
) {
    if tokens.category != Category::Function {
        return;
    }
    if !tokens.ret.present || !settings.show_return_tag {
        return;
    }

    let gap = settings.column_spacing;
    let type_text = tokens
        .ret
        .ty
        .clone()
        .unwrap_or_else(|| settings.type_placeholder.clone());

    // Align the return description with the parameter descriptions. Both
    // widths are zero for a parameter-less function, where the floor below
    // degrades the line to plain gaps.
    let (name_width, type_width) = if tokens.params.is_empty() {
        (0, 0)
    } else {
        (name_column_width(tokens), type_column_width(tokens, settings))
    };

    let spacing = (type_width as isize - type_text.chars().count() as isize
        + gap as isize
        + name_width as isize
        + gap as isize)
        .max(gap as isize) as usize;

    lines.push(String::new());

    let ty = stops.placeholder(&type_text);
    let desc = stops.placeholder("[return description]");

    match settings.tag_layout {
        TagLayout::Standard => lines.push(format!(
            "@return{}{}{}{}",
            " ".repeat(gap),
            ty,
            " ".repeat(spacing),
            desc
        )),
        TagLayout::Compact => lines.push(format!(
            "@return {}{}{}  {}",
            ty, settings.eos, settings.line_prefix, desc
        )),
    }
}

fn render_var_tag(
    tokens: &Tokens,
    settings: &Settings,
    stops: &mut TabStops,
    lines: &mut Vec<String>,
) {
    if tokens.category != Category::Variable {
        return;
    }

    let ty = tokens
        .var_type
        .clone()
        .unwrap_or_else(|| settings.type_placeholder.clone());

    lines.push(String::new());
    lines.push(format!("@var {}", stops.placeholder(&ty)));
}

/// Longest parameter name, in characters
fn name_column_width(tokens: &Tokens) -> usize {
    tokens
        .params
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
}

/// Width of the type column
///
/// Parameters without a recovered type occupy the placeholder's width; the
/// return type participates too so a long return annotation cannot overrun
/// the column. When no parameter carries a type the column is exactly the
/// placeholder's width — the return type must not widen it, since the
/// parameter lines collapse to a single gap and the return spacing has to
/// land on the same description column.
fn type_column_width(tokens: &Tokens, settings: &Settings) -> usize {
    let placeholder_len = settings.type_placeholder.chars().count();
    if tokens.params.iter().all(|p| p.ty.is_none()) {
        return placeholder_len;
    }

    let mut width = tokens
        .params
        .iter()
        .map(|p| p.ty.as_deref().map_or(placeholder_len, |t| t.chars().count()))
        .max()
        .unwrap_or(0);
    if let Some(ret) = &tokens.ret.ty {
        width = width.max(ret.chars().count());
    }
    width
}

/// Escape tab-stop delimiters appearing in a name
///
/// `$` would otherwise read as a placeholder marker to the snippet engine.
/// Only names are escaped; types and descriptions pass through.
fn escape(name: &str) -> String {
    name.replace('$', "\\$")
}

/// Join block lines with the configured delimiters and strip the trailing
/// whitespace that column padding leaves on lines whose last field is empty
fn assemble(lines: &[String], settings: &Settings) -> String {
    let body = lines
        .iter()
        .map(|line| format!("{}{}", settings.line_prefix, line))
        .collect::<Vec<_>>()
        .join(&settings.eos);

    let block = format!(
        "{}{}{}{}{}",
        settings.comment_open, settings.eos, body, settings.eos, settings.comment_close
    );

    block
        .split(&settings.eos)
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join(&settings.eos)
}
