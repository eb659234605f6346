//! Output formatting utilities

use crate::domain::mood::display_color;
use crate::domain::month::months;
use crate::domain::{
    Day, MonthView, MoodCalendar, MoodId, MoodTally, Rgb, PALETTE, UNSET_COLOR, WEEKDAY_LABELS,
};
use chrono::Datelike;

const BLANK_CELL: &str = "    ";

/// One-letter marker used when color is off
fn marker(mood: Option<MoodId>) -> char {
    match mood {
        Some(MoodId::Laugh) => 'L',
        Some(MoodId::Smile) => 'S',
        Some(MoodId::Meh) => 'M',
        Some(MoodId::Frown) => 'F',
        Some(MoodId::Sad) => 'D',
        None => '.',
    }
}

/// Black or white text, whichever reads better on `bg`
fn foreground_for(bg: Rgb) -> Rgb {
    let luma = (bg.r as u32 * 299 + bg.g as u32 * 587 + bg.b as u32 * 114) / 1000;
    if luma > 128 {
        Rgb::new(0, 0, 0)
    } else {
        Rgb::new(0xff, 0xff, 0xff)
    }
}

fn paint(text: &str, bg: Rgb) -> String {
    let fg = foreground_for(bg);
    format!(
        "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}\x1b[0m",
        fg.r, fg.g, fg.b, bg.r, bg.g, bg.b, text
    )
}

fn format_cell(day: &Day, color: bool) -> String {
    if color {
        format!(
            "{} ",
            paint(&format!("{:>3}", day.date.day()), display_color(day.mood))
        )
    } else {
        format!("{:>2}{} ", day.date.day(), marker(day.mood))
    }
}

/// Render one month as a Sunday-first grid
pub fn render_month(view: &MonthView, year: i32, color: bool) -> String {
    let mut output = format!("{} {}\n", view.name(), year);
    output.push_str(WEEKDAY_LABELS.join(" ").as_str());
    output.push('\n');

    for week in view.weeks() {
        let line: String = week
            .iter()
            .map(|cell| match cell {
                Some(day) => format_cell(day, color),
                None => BLANK_CELL.to_string(),
            })
            .collect();
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// Render all twelve months of the calendar
pub fn render_year(calendar: &MoodCalendar, color: bool) -> String {
    let year = calendar.year().get();
    let mut output = format!("{} Mood Calendar\n", year);
    for month in months() {
        output.push('\n');
        output.push_str(&render_month(&calendar.month_view(month), year, color));
    }
    output
}

/// List the palette, marking the armed mood with `*`
pub fn render_palette(current: Option<MoodId>, color: bool) -> String {
    let mut output = String::new();
    for entry in PALETTE.iter() {
        let armed = if current == Some(entry.mood) { '*' } else { ' ' };
        let swatch = if color {
            paint("   ", entry.color)
        } else {
            marker(Some(entry.mood)).to_string()
        };
        output.push_str(&format!(
            "{} {} {:<6} {}  icon: {}\n",
            armed, swatch, entry.mood, entry.color, entry.icon
        ));
    }
    let armed = if current.is_none() { '*' } else { ' ' };
    let swatch = if color {
        paint("   ", UNSET_COLOR)
    } else {
        marker(None).to_string()
    };
    output.push_str(&format!("{} {} {:<6} {}\n", armed, swatch, "none", UNSET_COLOR));
    output
}

/// Per-mood day counts in palette order
pub fn render_tally(tally: &MoodTally) -> String {
    let mut output = String::new();
    for mood in MoodId::ALL {
        output.push_str(&format!("{:<6} {:>3}\n", mood, tally.count(mood)));
    }
    output.push_str(&format!("{:<6} {:>3}\n", "unset", tally.unset));
    output
}

pub fn help_text() -> &'static str {
    "Commands:\n\
    \x20 year <YYYY>          switch year (clears all moods)\n\
    \x20 mood <name|none>     arm a mood for painting\n\
    \x20 paint <YYYY-MM-DD>   paint a day with the armed mood\n\
    \x20 paint <DD>           paint a day of the month last shown\n\
    \x20 random               give every day a random mood\n\
    \x20 clear                unset every day and disarm the mood\n\
    \x20 show [month]         show the year or one month\n\
    \x20 palette              list moods\n\
    \x20 stats                count days per mood\n\
    \x20 quit                 leave\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Year;
    use chrono::{Month, NaiveDate};

    fn calendar(y: i32) -> MoodCalendar {
        MoodCalendar::new(Year::new(y).unwrap())
    }

    #[test]
    fn test_render_month_plain_layout() {
        let cal = calendar(2023);
        let output = render_month(&cal.month_view(Month::March), 2023, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "March 2023");
        assert_eq!(lines[1], "Sun Mon Tue Wed Thu Fri Sat");
        // March 1st 2023 is a Wednesday: three blank cells
        assert_eq!(lines[2], "             1.  2.  3.  4.");
        assert!(lines.last().unwrap().contains("31."));
    }

    #[test]
    fn test_render_month_plain_markers() {
        let mut cal = calendar(2023);
        cal.set_current_mood(Some(MoodId::Sad));
        cal.paint_day(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        let output = render_month(&cal.month_view(Month::January), 2023, false);
        let first_week = output.lines().nth(2).unwrap();
        assert!(first_week.starts_with(" 1D  2."));
    }

    #[test]
    fn test_render_month_color_uses_palette() {
        let mut cal = calendar(2023);
        cal.set_current_mood(Some(MoodId::Smile));
        cal.paint_day(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        let output = render_month(&cal.month_view(Month::January), 2023, true);
        // smile background #72e3a6
        assert!(output.contains("\x1b[48;2;114;227;166m"));
        // unset background #888888
        assert!(output.contains("\x1b[48;2;136;136;136m"));
    }

    #[test]
    fn test_render_year_has_every_month() {
        let cal = calendar(2024);
        let output = render_year(&cal, false);
        assert!(output.starts_with("2024 Mood Calendar"));
        for name in crate::domain::MONTH_NAMES {
            assert!(output.contains(&format!("{} 2024", name)));
        }
        assert!(output.contains("29."));
    }

    #[test]
    fn test_render_palette_marks_armed() {
        let output = render_palette(Some(MoodId::Meh), false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[2].starts_with('*'));
        assert!(lines[2].contains("#dff4c7"));
        assert!(lines[4].contains("icon: sad-tear"));
        assert!(lines[5].starts_with(' '));
    }

    #[test]
    fn test_render_palette_none_armed() {
        let output = render_palette(None, false);
        assert!(output.lines().last().unwrap().starts_with('*'));
    }

    #[test]
    fn test_render_tally() {
        let mut cal = calendar(2023);
        cal.set_current_mood(Some(MoodId::Frown));
        cal.paint_day(NaiveDate::from_ymd_opt(2023, 4, 4).unwrap());
        let output = render_tally(&cal.tally());
        assert!(output.contains("frown    1"));
        assert!(output.contains("unset  364"));
    }

    #[test]
    fn test_foreground_contrast() {
        assert_eq!(foreground_for(UNSET_COLOR), Rgb::new(0, 0, 0));
        assert_eq!(
            foreground_for(Rgb::new(0x2d, 0x6b, 0x5f)),
            Rgb::new(0xff, 0xff, 0xff)
        );
    }
}
