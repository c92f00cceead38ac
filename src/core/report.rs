//! Report assembler: rows in, final colored text out.

use crate::core::config::{Config, SeparatorWidthMode, Settings, CAPPED_SEPARATOR_WIDTH};
use crate::core::render::Row;
use crate::ui::color::Painter;
use crate::ui::table::{Cell, Table};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

enum Line {
    Header,
    Rule,
    Entry,
}

/// Assemble the report text for `rows`, in the order given.
///
/// Separator rows become a rule whose width follows the configured
/// `SeparatorWidthMode`. Each line ends with a newline.
pub fn assemble(rows: &[Row], config: &Config, hostname: &str, painter: &Painter) -> String {
    let settings = &config.settings;
    let colors = &settings.colors;

    let mut layout = Vec::with_capacity(rows.len() + 2);
    if settings.title_enabled {
        layout.push(Line::Header);
        layout.push(Line::Rule);
    }

    let mut table = Table::new();
    for row in rows {
        match row {
            Row::Separator => layout.push(Line::Rule),
            Row::Entry { label, value } => {
                let label_cell = Cell::styled(label.as_str(), &colors.primary)
                    .push(settings.suffix.as_str(), Some(&colors.suffix));
                let value_cell = Cell::styled(value.to_string(), &colors.secondary);
                table.add_row(vec![label_cell, value_cell]);
                layout.push(Line::Entry);
            }
        }
    }

    let header_width = if settings.title_enabled {
        hostname.width()
    } else {
        0
    };
    let rule = separator_rule(settings, table.width().max(header_width));
    let painted_rule = painter.paint(&colors.separator, &rule);
    let painted_header = painter.paint(&colors.title, hostname);

    let mut entries = table.render_lines(painter).into_iter();
    let mut output = String::new();

    for line in layout {
        match line {
            Line::Header => output.push_str(&painted_header),
            Line::Rule => output.push_str(&painted_rule),
            Line::Entry => {
                if let Some(entry) = entries.next() {
                    output.push_str(&entry);
                }
            }
        }
        output.push('\n');
    }

    output
}

/// The rule drawn for separator rows, given the widest line of the report
pub fn separator_rule(settings: &Settings, content_width: usize) -> String {
    match settings.separator_width_mode {
        SeparatorWidthMode::Fixed => settings.separator.clone(),
        SeparatorWidthMode::FitContent => repeat_to_width(&settings.separator_glyph, content_width),
        SeparatorWidthMode::FitContentCapped => repeat_to_width(
            &settings.separator_glyph,
            content_width.min(CAPPED_SEPARATOR_WIDTH),
        ),
    }
}

/// Cycle through `glyph` until the rule is `width` columns wide
fn repeat_to_width(glyph: &str, width: usize) -> String {
    let mut rule = String::new();
    if glyph.width() == 0 {
        return rule;
    }

    let mut used = 0;
    for c in glyph.chars().cycle() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > width {
            break;
        }
        rule.push(c);
        used += char_width;
    }

    rule
}
