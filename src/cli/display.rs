// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the zyros CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `ZYROS_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and falls back to plain text when stdout isn't a TTY, in which
//! case highlights use the configured markers instead of color.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use zyros::{highlight_with, Field, QueryRequest, QueryResult, SearchHit, SearchableRecord};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// Characters of body text shown around the first body match.
const SNIPPET_CHARS: usize = 64;

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
    if let Ok(theme) = std::env::var("ZYROS_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8) is light
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

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(MAGENTA);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Calculate visible length (excluding ANSI codes)
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

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{b}│{r}{}{}{b}│{r}",
        content,
        " ".repeat(pad),
        b = border(),
        r = reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{b}┌{r}{}{b}{}┐{r}",
        label_part,
        "─".repeat(remaining),
        b = border(),
        r = reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// Highlight for the terminal: color on a TTY, markers otherwise.
fn marked(text: &str, query: &str, open: &str, close: &str) -> String {
    if use_colors() {
        let open = format!("{}{}", BOLD, YELLOW());
        highlight_with(text, query, &open, RESET)
    } else {
        highlight_with(text, query, open, close)
    }
}

/// Cut `text` to at most `max` characters on char boundaries.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

/// A window of body text starting a little before the first body match.
pub fn snippet(hit: &SearchHit) -> String {
    let body = hit.record.body_text.as_str();
    let start = hit
        .matched_spans
        .iter()
        .find(|s| s.field == Field::Body)
        .map_or(0, |s| s.range.start);

    // Back up a few characters for context
    let lead = body[..start]
        .char_indices()
        .rev()
        .nth(15)
        .map_or(0, |(i, _)| i);
    let window = truncate_chars(&body[lead..], SNIPPET_CHARS);

    let mut out = String::new();
    if lead > 0 {
        out.push('…');
    }
    out.push_str(window.trim());
    if lead + window.len() < body.len() {
        out.push('…');
    }
    out
}

pub fn print_results(
    site_title: Option<&str>,
    request: &QueryRequest,
    result: &QueryResult,
    open: &str,
    close: &str,
) {
    let label = match site_title {
        Some(title) => format!("{} · \"{}\"", title, request.query),
        None => format!("\"{}\"", request.query),
    };
    section_top(&label);

    if result.is_empty() {
        row(&format!(" {}", themed(GRAY, &[], "No results found")));
        section_bot();
        return;
    }

    for (rank, hit) in result.iter().enumerate() {
        let title = marked(
            truncate_chars(&hit.record.title, BOX_WIDTH - 20),
            &request.query,
            open,
            close,
        );
        let score = themed(GREEN, &[], &format!("{:.3}", hit.score));
        row(&format!(" {:>2}. {}  {}", rank + 1, title, score));

        let mut meta = vec![hit.record.identifier.clone()];
        if let Some(category) = &hit.record.category {
            meta.push(category.clone());
        }
        if let Some(date) = hit.record.published_at {
            meta.push(date.format("%Y-%m-%d").to_string());
        }
        if !hit.record.tags.is_empty() {
            let tags: Vec<&str> = hit.record.tags.iter().map(String::as_str).collect();
            meta.push(format!("#{}", tags.join(" #")));
        }
        let meta = truncate_chars(&meta.join(" · "), BOX_WIDTH - 6).to_string();
        row(&format!("     {}", themed(MAGENTA, &[], &meta)));

        row(&format!(
            "     {}",
            marked(&snippet(hit), &request.query, open, close)
        ));
    }

    section_bot();
    println!(
        "{} result{} · sorted by {}",
        result.len(),
        if result.len() == 1 { "" } else { "s" },
        request.sort
    );
}

pub fn print_inspect(site_title: Option<&str>, records: &[SearchableRecord]) {
    section_top(site_title.unwrap_or("site"));
    row(&format!(" {} records", records.len()));

    let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
    let mut tags: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *categories
            .entry(record.category.as_deref().unwrap_or("(none)"))
            .or_default() += 1;
        for tag in &record.tags {
            *tags.entry(tag.as_str()).or_default() += 1;
        }
    }
    section_bot();

    section_top("RECORDS");
    for record in records {
        let room = BOX_WIDTH.saturating_sub(record.identifier.chars().count() + 3);
        let title = themed(GRAY, &[], truncate_chars(&record.title, room));
        row(&format!(" {}  {}", record.identifier, title));
    }
    section_bot();

    section_top("CATEGORIES");
    for (category, count) in &categories {
        row(&format!(" {:<40} {:>5}", category, count));
    }
    section_bot();

    if !tags.is_empty() {
        section_top("TAGS");
        for (tag, count) in &tags {
            row(&format!(" #{:<39} {:>5}", tag, count));
        }
        section_bot();
    }
}
