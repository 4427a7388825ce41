//! Turns a scouting report into display-ready rows. Nothing here touches the
//! terminal, so the same view can be drawn by ratatui or inspected in tests.

use serde_json::Value;

use crate::state::{ScoutingReport, SelectionState};

pub const EMPTY_TITLE: &str = "No report generated";
pub const EMPTY_PROMPT: &str =
    "Select player role, attributes, league and team to generate a scouting report.";
pub const MISSING_VALUE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipKind {
    Position,
    League,
    Team,
    Attribute,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub kind: ChipKind,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCell {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
    pub name: String,
    pub subtitle: String,
    pub distance: String,
    pub stats: Vec<StatCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportView {
    Empty {
        title: &'static str,
        prompt: &'static str,
    },
    Report {
        criteria: Vec<Chip>,
        roster: Vec<String>,
        players: Vec<PlayerCard>,
    },
}

/// `criteria` is the selection captured when the report was requested.
pub fn build_report_view(criteria: &SelectionState, report: Option<&ScoutingReport>) -> ReportView {
    let Some(report) = report else {
        return ReportView::Empty {
            title: EMPTY_TITLE,
            prompt: EMPTY_PROMPT,
        };
    };

    let mut chips = vec![Chip {
        kind: ChipKind::Position,
        label: report.position.clone(),
    }];
    if let Some(league) = &criteria.league {
        chips.push(Chip {
            kind: ChipKind::League,
            label: league.clone(),
        });
    }
    chips.push(Chip {
        kind: ChipKind::Team,
        label: report.team.clone(),
    });
    chips.extend(criteria.attributes.iter().map(|attr| Chip {
        kind: ChipKind::Attribute,
        label: attr.clone(),
    }));

    let players = report
        .similar_players
        .iter()
        .map(|p| PlayerCard {
            name: p.player.clone(),
            subtitle: format!("{} • {}", p.position, p.team),
            distance: format!("Similarity Distance: {}", format_decimal(p.distance)),
            stats: p
                .stats
                .iter()
                .map(|(name, value)| StatCell {
                    name: deslug_stat_name(name),
                    value: format_stat_value(Some(value)),
                })
                .collect(),
        })
        .collect();

    ReportView::Report {
        criteria: chips,
        roster: report.team_players.clone(),
        players,
    }
}

/// Two decimals with ties rounded away from zero (0.125 -> 0.13).
pub fn format_decimal(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

/// Numbers get two decimals; `true` renders blank; other empty or
/// non-scalar values fall back to `N/A`.
pub fn format_stat_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .map(format_decimal)
            .unwrap_or_else(|| n.to_string()),
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        // A bare `true` carries no value to show.
        Some(Value::Bool(true)) => String::new(),
        _ => MISSING_VALUE.to_string(),
    }
}

pub fn deslug_stat_name(name: &str) -> String {
    name.replace('_', " ")
}
