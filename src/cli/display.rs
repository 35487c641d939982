// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the mahout-search CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `MAHOUT_SEARCH_THEME` first, then `COLORFGBG`, then defaults to dark.
//! `NO_COLOR` and a non-TTY target stream turn every escape code off, borders included,
//! so piped output stays clean.

use std::sync::OnceLock;

use mahout_search::build::BuildSummary;
use mahout_search::{IndexStats, IndexedItem};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

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
    if let Ok(theme) = std::env::var("MAHOUT_SEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
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

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);     // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);       // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);  // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
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

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Color decision given the environment and the target stream's TTY state.
fn colors_allowed(no_color: bool, is_tty: bool) -> bool {
    !no_color && is_tty
}

/// Check if colors should be used on `stream` (TTY detection)
pub fn use_colors_on(stream: atty::Stream) -> bool {
    colors_allowed(std::env::var_os("NO_COLOR").is_some(), atty::is(stream))
}

/// Check if colors should be used on stdout
pub fn use_colors() -> bool {
    use_colors_on(atty::Stream::Stdout)
}

fn paint(enabled: bool, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if enabled {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Apply theme color with optional modifiers, for text bound for stdout
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    paint(use_colors(), color_fn, modifiers, text)
}

/// Same as [`themed`], for text bound for stderr
pub fn themed_err(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    paint(use_colors_on(atty::Stream::Stderr), color_fn, modifiers, text)
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

/// Shorten to `max` visible characters with a trailing ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("├"),
        label_part,
        border(&format!("{}┤", "─".repeat(remaining)))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Category label, highlighted when it carries the boost.
pub fn category_label(category: &str, featured: bool) -> String {
    let text = if category.is_empty() { "-" } else { category };
    if featured {
        themed(MAGENTA, &[BOLD], text)
    } else {
        themed(GRAY, &[], text)
    }
}

/// Color-coded weight value
pub fn weight_value(weight: f64) -> String {
    let text = format!("{:>5.2}", weight);
    if weight > 1.0 {
        themed(GREEN, &[BOLD], &text)
    } else if weight < 1.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SCREENS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_build_summary(summary: &BuildSummary) {
    eprintln!();
    eprintln!("{} Build complete", themed_err(GREEN, &[BOLD], "✓"));
    eprintln!(
        "   {} items │ {} featured ({} ×{}) │ {}",
        summary.item_count,
        summary.featured_count,
        summary.ranking.featured_category,
        summary.ranking.boost,
        format_size(summary.bytes)
    );
    eprintln!("   {}", summary.path.display());
}

/// Print ranked results, numbered from 1.
pub fn print_results(query: &str, results: &[&IndexedItem], total: usize, featured: &str) {
    section_top(&format!("RESULTS for \"{}\"", truncate(query, 40)));
    if results.is_empty() {
        row(&format!("  {}", themed(GRAY, &[], "no matches")));
    }
    for (rank, item) in results.iter().enumerate() {
        let is_featured = item.category() == featured;
        let line = format!(
            " {:>3}. {} {}  {}",
            rank + 1,
            weight_value(item.weight),
            category_label(&truncate(item.category(), 10), is_featured),
            truncate(item.title(), 44)
        );
        row(&line);
        if !item.href().is_empty() {
            row(&format!("      {}", themed(BLUE, &[], &truncate(item.href(), 60))));
        }
    }
    if total > results.len() {
        section_mid("MORE");
        row(&format!("  {} more (use --limit 0 for all)", total - results.len()));
    }
    section_bot();
}

pub fn print_stats(path: &str, featured: &str, boost: f64, checksum: u32, stats: &IndexStats) {
    section_top("INDEX");
    row(&format!("  file      {}", truncate(path, 58)));
    row(&format!("  checksum  {:08x}", checksum));
    row(&format!("  ranking   {} ×{}", category_label(featured, true), boost));
    section_mid("ITEMS");
    row(&format!("  total     {}", stats.item_count));
    row(&format!("  featured  {}", stats.featured_count));
    for (category, count) in &stats.categories {
        let label = category_label(&truncate(category, 20), category == featured);
        let padded = format!("{}{}", label, " ".repeat(20usize.saturating_sub(visible_len(&label))));
        row(&format!("    {} {:>6}", padded, count));
    }
    section_mid("SIZE");
    row(&format!("  raw       {}", format_size(stats.raw_bytes)));
    let saved = if stats.raw_bytes == 0 {
        0.0
    } else {
        (1.0 - stats.brotli_bytes as f64 / stats.raw_bytes as f64) * 100.0
    };
    let saved_text = format!("{:.0}% smaller", saved);
    row(&format!(
        "  brotli    {} ({})",
        format_size(stats.brotli_bytes),
        if saved >= 0.0 {
            themed(GREEN, &[], &saved_text)
        } else {
            themed(RED, &[], &saved_text)
        }
    ));
    section_bot();
}
