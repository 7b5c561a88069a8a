// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the searchbox CLI.
//!
//! OneDark on dark terminals, One Light on light ones. Detection tries
//! `SEARCHBOX_THEME` first, then `COLORFGBG`, then falls back to dark. Colors
//! are dropped entirely under `NO_COLOR` or when stdout is not a TTY, so the
//! output pipes cleanly.

use searchbox::corpus::Corpus;
use searchbox::index::IndexStats;
use searchbox::render::ResultsView;
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SEARCHBOX_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(RED);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme color plus modifiers, or nothing when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `width` characters, marking the cut with `…`.
pub fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Green under a millisecond, yellow under ten, red above.
pub fn timing_us(value: f64) -> String {
    let text = format!("{:.1} µs", value);
    let color: fn() -> String = if value < 1_000.0 {
        GREEN
    } else if value < 10_000.0 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[], &text)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{border}│{reset}{content}{}{border}│{reset}", " ".repeat(pad));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{border}┌{reset}{label_part}{border}{}┐{reset}", "─".repeat(remaining));
}

/// └──────────────────┘
pub fn section_bot() {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    println!("{border}└{}┘{reset}", "─".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// The dropdown, as a box.
pub fn print_view(query: &str, view: &ResultsView, elapsed_us: f64) {
    section_top(&format!("\"{}\"", clip(query, 40)));
    match view {
        ResultsView::Cleared => row(&themed(GRAY, &[DIM], " (panel hidden: query too short)")),
        ResultsView::Loading => row(&themed(YELLOW, &[], " Loading search...")),
        ResultsView::NoResults => row(&themed(GRAY, &[], " No results found")),
        ResultsView::Results(items) => {
            for (rank, item) in items.iter().enumerate() {
                let heading = format!(" {:>2}. {}", rank + 1, clip(&item.title, BOX_WIDTH - 6));
                row(&themed(GREEN, &[BOLD], &heading));
                row(&themed(BLUE, &[], &format!("     {}", clip(&item.url, BOX_WIDTH - 6))));
                row(&format!("     {}", clip(&item.snippet, BOX_WIDTH - 6)));
            }
        }
    }
    row(&themed(
        GRAY,
        &[],
        &format!(" {} result(s) in {}", view.items().len(), timing_us(elapsed_us)),
    ));
    section_bot();
}

/// Corpus and index summary.
pub fn print_stats(source: &str, bytes: usize, corpus: &Corpus, stats: &IndexStats) {
    section_top("CORPUS");
    row(&format!(" file       {}", clip(source, BOX_WIDTH - 13)));
    row(&format!(" size       {}", format_size(bytes)));
    row(&format!(" documents  {}", corpus.len()));
    section_bot();

    section_top("INDEX");
    row(&format!(" terms      {}", stats.terms));
    row(&format!(" postings   {}", stats.postings));
    for (field, average) in &stats.average_field_lengths {
        row(&format!(" avg {:<7}{:.1} tokens", field, average));
    }
    section_bot();
}
