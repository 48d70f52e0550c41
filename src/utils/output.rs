use crate::stats::ClipReport;
use colored::*;

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>12}: {}", Self::label(label), color_fn(value));
    }

    /// Print the summary of one column's outlier pass
    pub fn print_clip_report(column: &str, report: &ClipReport) {
        Self::print_header(&format!("📊 Outliers: {}", column));
        Self::print_field_colored("Q1", &format!("{:.4}", report.quartiles.q1), Self::info);
        Self::print_field_colored("Q3", &format!("{:.4}", report.quartiles.q3), Self::info);
        Self::print_field_colored("Lower", &format!("{:.4}", report.bounds.lower), Self::info);
        Self::print_field_colored("Upper", &format!("{:.4}", report.bounds.upper), Self::info);
        let clamped = report.clamped.to_string();
        if report.clamped > 0 {
            Self::print_field_colored("Clamped", &clamped, Self::warning);
        } else {
            Self::print_field_colored("Clamped", &clamped, Self::muted);
        }
    }
}

pub fn print_success(msg: &str) {
    println!("✅ {}", OutputStyle::success(msg));
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {}", OutputStyle::warning(msg));
}
