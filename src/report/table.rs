//! Fixed-width console table

use crate::version::types::UpdateRecord;

const NAME_WIDTH: usize = 40;
const DECLARED_WIDTH: usize = 16;
const LATEST_WIDTH: usize = 14;

pub const BANNER: &str = r#"
 _____                                             _____                     _ _
/  __ \                                           |  __ \                   | (_)
| /  \/ ___  _ __ ___  _ __   ___  ___  ___ _ __  | |  \/_   _  __ _ _ __ __| |_  __ _ _ __
| |    / _ \| '_ ` _ \| '_ \ / _ \/ __|/ _ | '__| | | __| | | |/ _` | '__/ _` | |/ _` | '_ \
| \__/| (_) | | | | | | |_) | (_) \__ |  __| |    | |_\ | |_| | (_| | | | (_| | | (_| | | | |
 \____/\___/|_| |_| |_| .__/ \___/|___/\___|_|     \____/\__,_|\__,_|_|  \__,_|_|\__,_|_| |_|
                      | |
                      |_|
"#;

fn row(name: &str, declared: &str, latest: &str) -> String {
    format!(
        "{:<NAME_WIDTH$} {:<DECLARED_WIDTH$} {:<LATEST_WIDTH$}",
        name, declared, latest
    )
}

/// Render update records as header, divider and one row per record.
///
/// Columns are left-aligned and padded, never truncated. The result has no
/// trailing newline.
pub fn render_table(records: &[UpdateRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(row("Package Name", "Current version", "Latest version"));
    lines.push(row(
        &"-".repeat(NAME_WIDTH),
        &"-".repeat(DECLARED_WIDTH),
        &"-".repeat(LATEST_WIDTH),
    ));
    lines.extend(
        records
            .iter()
            .map(|r| row(&r.name, &r.declared_version, &r.latest_version)),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, declared: &str, latest: &str) -> UpdateRecord {
        UpdateRecord {
            name: name.to_string(),
            declared_version: declared.to_string(),
            latest_version: latest.to_string(),
        }
    }

    #[test]
    fn render_table_pads_columns_to_fixed_widths() {
        let table = render_table(&[record("acme/lib", "^1.0", "1.5.0")]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            format!("{:<40} {:<16} {:<14}", "Package Name", "Current version", "Latest version")
        );
        assert_eq!(
            lines[1],
            format!("{} {} {}", "-".repeat(40), "-".repeat(16), "-".repeat(14))
        );
        assert_eq!(
            lines[2],
            format!("{:<40} {:<16} {:<14}", "acme/lib", "^1.0", "1.5.0")
        );
        assert_eq!(lines[2].len(), 40 + 1 + 16 + 1 + 14);
    }

    #[test]
    fn render_table_keeps_record_order() {
        let table = render_table(&[
            record("zeta/z", "^1.0", "1.1"),
            record("alpha/a", "^2.0", "2.2"),
        ]);
        let names: Vec<&str> = table
            .lines()
            .skip(2)
            .map(|line| line.split_whitespace().next().unwrap())
            .collect();

        assert_eq!(names, vec!["zeta/z", "alpha/a"]);
    }

    #[test]
    fn render_table_does_not_truncate_long_names() {
        let long_name = "some-very-long-vendor-name/some-even-longer-package-name";
        let table = render_table(&[record(long_name, "^1.0", "1.0.0")]);

        assert!(table.lines().nth(2).unwrap().starts_with(long_name));
    }

    #[test]
    fn render_table_without_records_has_only_header() {
        assert_eq!(render_table(&[]).lines().count(), 2);
    }
}
