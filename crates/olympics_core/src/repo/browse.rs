//! Generic table browser over the six catalog tables.
//!
//! # Responsibility
//! - Render any catalog table as string rows for list views.
//! - Apply the "contains" filter used by list views across every cell.
//!
//! # Invariants
//! - Table selection is a closed `TableKind`; each kind maps to one
//!   compile-time query. Caller text never becomes SQL.
//! - Row order matches the corresponding repository `list_all`.

use crate::model::validation::ValidationError;
use crate::repo::RepoResult;
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One of the six catalog tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Sport,
    Athlete,
    Team,
    Olympiad,
    Event,
    Participation,
}

impl TableKind {
    pub const ALL: [TableKind; 6] = [
        Self::Sport,
        Self::Athlete,
        Self::Team,
        Self::Olympiad,
        Self::Event,
        Self::Participation,
    ];

    pub fn table_name(self) -> &'static str {
        match self {
            Self::Sport => "sport",
            Self::Athlete => "athlete",
            Self::Team => "team",
            Self::Olympiad => "olympiad",
            Self::Event => "event",
            Self::Participation => "participation",
        }
    }

    /// Whether rows of this table carry a `name` column.
    pub fn is_named(self) -> bool {
        !matches!(self, Self::Participation)
    }

    /// Accepts the table name in any case, singular or plural.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let singular = normalized.strip_suffix('s').unwrap_or(normalized.as_str());
        Self::ALL
            .into_iter()
            .find(|kind| kind.table_name() == normalized || kind.table_name() == singular)
    }

    fn browse_sql(self) -> &'static str {
        match self {
            Self::Sport => "SELECT id_sport, name FROM sport ORDER BY id_sport ASC;",
            Self::Athlete => {
                "SELECT id_athlete, name, sex, age, weight, height, photo
                 FROM athlete
                 ORDER BY id_athlete ASC;"
            }
            Self::Team => "SELECT id_team, name, initials FROM team ORDER BY id_team ASC;",
            Self::Olympiad => {
                "SELECT id_olympiad, name, year, season, city
                 FROM olympiad
                 ORDER BY id_olympiad ASC;"
            }
            Self::Event => {
                "SELECT id_event, name, id_olympiad, id_sport
                 FROM event
                 ORDER BY id_event ASC;"
            }
            Self::Participation => {
                "SELECT id_athlete, id_event, id_team, medal
                 FROM participation
                 ORDER BY id_athlete ASC, id_event ASC;"
            }
        }
    }
}

impl Display for TableKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}

impl FromStr for TableKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::UnknownVariant {
            kind: "table",
            value: s.trim().to_string(),
        })
    }
}

/// A table rendered as text, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub kind: TableKind,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    /// Keeps rows where any cell contains `text`, ignoring case.
    ///
    /// The text is matched as typed, whitespace included. An empty filter
    /// keeps every row.
    pub fn filter(mut self, text: &str) -> Self {
        let needle = text.to_lowercase();
        if needle.is_empty() {
            return self;
        }
        self.rows
            .retain(|row| row.iter().any(|cell| cell.to_lowercase().contains(&needle)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Loads every row of `kind`, optionally filtered.
pub fn browse_table(
    conn: &Connection,
    kind: TableKind,
    filter: Option<&str>,
) -> RepoResult<TableView> {
    let mut stmt = conn.prepare_cached(kind.browse_sql())?;
    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    let column_count = columns.len();
    let mut rows = stmt.query([])?;
    let mut rendered = Vec::new();
    while let Some(row) = rows.next()? {
        let mut cells = Vec::with_capacity(column_count);
        for index in 0..column_count {
            cells.push(render_cell(row.get_ref(index)?));
        }
        rendered.push(cells);
    }

    let view = TableView {
        kind,
        columns,
        rows: rendered,
    };
    Ok(match filter {
        Some(text) => view.filter(text),
        None => view,
    })
}

fn render_cell(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(number) => number.to_string(),
        ValueRef::Real(number) => number.to_string(),
        ValueRef::Text(text) => String::from_utf8_lossy(text).into_owned(),
        ValueRef::Blob(bytes) => format!("<{} bytes>", bytes.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::{render_cell, TableKind, TableView};
    use rusqlite::types::ValueRef;

    #[test]
    fn parse_accepts_plural_and_mixed_case() {
        assert_eq!(TableKind::parse("Sports"), Some(TableKind::Sport));
        assert_eq!(TableKind::parse(" ATHLETE "), Some(TableKind::Athlete));
        assert_eq!(
            TableKind::parse("participations"),
            Some(TableKind::Participation)
        );
        assert_eq!(TableKind::parse("sport; DROP TABLE sport"), None);
    }

    #[test]
    fn render_cell_formats_blob_and_null() {
        assert_eq!(render_cell(ValueRef::Null), "");
        assert_eq!(render_cell(ValueRef::Blob(&[1, 2, 3])), "<3 bytes>");
        assert_eq!(render_cell(ValueRef::Real(60.5)), "60.5");
    }

    #[test]
    fn filter_matches_any_cell_case_insensitively() {
        let view = TableView {
            kind: TableKind::Team,
            columns: vec!["id_team".into(), "name".into(), "initials".into()],
            rows: vec![
                vec!["1".into(), "Team A".into(), "TMA".into()],
                vec!["2".into(), "Team B".into(), "TMB".into()],
            ],
        };

        let filtered = view.clone().filter("tma");
        assert_eq!(filtered.rows.len(), 1);
        assert_eq!(filtered.rows[0][1], "Team A");

        assert_eq!(view.clone().filter("").rows.len(), 2);
        assert_eq!(view.clone().filter(" b").rows.len(), 1);
        assert!(view.clone().filter("  ").is_empty());
        assert!(view.filter("swimming").is_empty());
    }
}
