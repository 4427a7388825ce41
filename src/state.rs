use std::collections::VecDeque;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog;

pub const MISSING_SELECTION_MSG: &str = "Please select a role, league, team";
pub const FETCH_FAILED_MSG: &str = "Failed to fetch analysis results. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Role,
    Attributes,
    League,
    Team,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    Loading,
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub role: Option<String>,
    // Kept in the order the user ticked them.
    pub attributes: Vec<String>,
    pub league: Option<String>,
    pub team: Option<String>,
}

impl SelectionState {
    pub fn set_role(&mut self, role: &str) {
        self.role = non_empty(role);
        self.attributes.clear();
    }

    pub fn set_league(&mut self, league: &str) {
        self.league = non_empty(league);
        self.team = None;
    }

    pub fn set_team(&mut self, team: &str) {
        self.team = non_empty(team);
    }

    pub fn toggle_attribute(&mut self, attribute: &str) {
        if let Some(pos) = self.attributes.iter().position(|a| a == attribute) {
            self.attributes.remove(pos);
        } else {
            self.attributes.push(attribute.to_string());
        }
    }

    pub fn is_attribute_selected(&self, attribute: &str) -> bool {
        self.attributes.iter().any(|a| a == attribute)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeRequest {
    pub position: String,
    pub team: String,
    pub league: String,
    pub specific_role_cols: Vec<String>,
}

/// Builds the backend payload, or `None` when a required field is missing.
pub fn build_analyze_request(selection: &SelectionState) -> Option<AnalyzeRequest> {
    let (Some(role), Some(league), Some(team)) = (
        selection.role.as_deref(),
        selection.league.as_deref(),
        selection.team.as_deref(),
    ) else {
        return None;
    };
    Some(AnalyzeRequest {
        position: role.to_string(),
        team: team.to_string(),
        league: league.to_string(),
        specific_role_cols: selection
            .attributes
            .iter()
            .map(|label| catalog::attribute_code(label).to_string())
            .collect(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoutingReport {
    pub position: String,
    pub team: String,
    #[serde(default)]
    pub team_players: Vec<String>,
    #[serde(default)]
    pub similar_players: Vec<SimilarPlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarPlayer {
    pub player: String,
    pub position: String,
    pub team: String,
    pub distance: f64,
    #[serde(default)]
    pub stats: Map<String, Value>,
}

#[derive(Debug, Clone)]
pub enum Delta {
    AnalysisReady { seq: u64, report: ScoutingReport },
    AnalysisFailed { seq: u64, detail: String },
    Log(String),
}

#[derive(Debug, Clone)]
pub enum ProviderCommand {
    Analyze { seq: u64, request: AnalyzeRequest },
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub selection: SelectionState,
    pub status: RequestStatus,
    pub report: Option<ScoutingReport>,
    // Selection as it was when the displayed report was requested.
    pub report_criteria: SelectionState,
    pub report_fetched_at: Option<SystemTime>,
    pub report_scroll: u16,
    pub pending: Option<(u64, SelectionState)>,
    pub next_seq: u64,
    pub focus: FormFocus,
    pub role_cursor: usize,
    pub attribute_cursor: usize,
    pub league_cursor: usize,
    pub team_cursor: usize,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            selection: SelectionState::default(),
            status: RequestStatus::Idle,
            report: None,
            report_criteria: SelectionState::default(),
            report_fetched_at: None,
            report_scroll: 0,
            pending: None,
            next_seq: 1,
            focus: FormFocus::Role,
            role_cursor: 0,
            attribute_cursor: 0,
            league_cursor: 0,
            team_cursor: 0,
            logs: VecDeque::with_capacity(200),
            help_overlay: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn set_role(&mut self, role: &str) {
        self.selection.set_role(role);
        self.attribute_cursor = 0;
    }

    pub fn set_league(&mut self, league: &str) {
        self.selection.set_league(league);
        self.team_cursor = 0;
    }

    pub fn set_team(&mut self, team: &str) {
        self.selection.set_team(team);
    }

    pub fn toggle_attribute(&mut self, attribute: &str) {
        self.selection.toggle_attribute(attribute);
    }

    /// Attribute labels offered for the current role.
    pub fn attribute_options(&self) -> &'static [&'static str] {
        self.selection
            .role
            .as_deref()
            .map(catalog::attributes_for_role)
            .unwrap_or(&[])
    }

    /// Teams offered for the current league.
    pub fn team_options(&self) -> &'static [&'static str] {
        self.selection
            .league
            .as_deref()
            .map(catalog::teams_for_league)
            .unwrap_or(&[])
    }

    /// Validates the selection and moves to `Loading`. The returned command
    /// is the only way a request reaches the provider.
    pub fn begin_submit(&mut self) -> Option<ProviderCommand> {
        if self.is_loading() {
            self.push_log("[INFO] Analysis already running");
            return None;
        }
        let Some(request) = build_analyze_request(&self.selection) else {
            self.status = RequestStatus::Error(MISSING_SELECTION_MSG.to_string());
            return None;
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending = Some((seq, self.selection.clone()));
        self.status = RequestStatus::Loading;
        self.push_log(format!(
            "[INFO] Analysis #{seq} requested: {} / {} ({} attrs)",
            request.position,
            request.team,
            request.specific_role_cols.len()
        ));
        Some(ProviderCommand::Analyze { seq, request })
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormFocus::Role if self.selection.role.is_some() => FormFocus::Attributes,
            FormFocus::Role | FormFocus::Attributes => FormFocus::League,
            FormFocus::League if self.selection.league.is_some() => FormFocus::Team,
            FormFocus::League | FormFocus::Team => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Role,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormFocus::Role => FormFocus::Submit,
            FormFocus::Attributes => FormFocus::Role,
            FormFocus::League if self.selection.role.is_some() => FormFocus::Attributes,
            FormFocus::League => FormFocus::Role,
            FormFocus::Team => FormFocus::League,
            FormFocus::Submit if self.selection.league.is_some() => FormFocus::Team,
            FormFocus::Submit => FormFocus::League,
        };
    }

    pub fn cursor_next(&mut self) {
        let len = self.focused_len();
        if let Some(cursor) = self.focused_cursor_mut()
            && *cursor + 1 < len
        {
            *cursor += 1;
        }
    }

    pub fn cursor_prev(&mut self) {
        if let Some(cursor) = self.focused_cursor_mut() {
            *cursor = cursor.saturating_sub(1);
        }
    }

    /// Enter/Space on the focused field. Returns a command when it submits.
    pub fn activate(&mut self) -> Option<ProviderCommand> {
        match self.focus {
            FormFocus::Role => {
                if let Some(role) = catalog::ROLES.get(self.role_cursor).map(|(r, _)| *r) {
                    self.set_role(role);
                }
            }
            FormFocus::Attributes => {
                if let Some(attr) = self.attribute_options().get(self.attribute_cursor) {
                    self.toggle_attribute(attr);
                }
            }
            FormFocus::League => {
                if let Some(league) = catalog::LEAGUES.get(self.league_cursor).map(|(l, _)| *l) {
                    self.set_league(league);
                }
            }
            FormFocus::Team => {
                if let Some(team) = self.team_options().get(self.team_cursor) {
                    self.set_team(team);
                }
            }
            FormFocus::Submit => return self.begin_submit(),
        }
        None
    }

    /// Backspace: back to the "Select a ..." placeholder.
    pub fn clear_focused(&mut self) {
        match self.focus {
            FormFocus::Role => self.set_role(""),
            FormFocus::League => self.set_league(""),
            FormFocus::Team => self.set_team(""),
            FormFocus::Attributes | FormFocus::Submit => {}
        }
    }

    pub fn scroll_report_down(&mut self) {
        self.report_scroll = self.report_scroll.saturating_add(5);
    }

    pub fn scroll_report_up(&mut self) {
        self.report_scroll = self.report_scroll.saturating_sub(5);
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            FormFocus::Role => catalog::ROLES.len(),
            FormFocus::Attributes => self.attribute_options().len(),
            FormFocus::League => catalog::LEAGUES.len(),
            FormFocus::Team => self.team_options().len(),
            FormFocus::Submit => 0,
        }
    }

    fn focused_cursor_mut(&mut self) -> Option<&mut usize> {
        match self.focus {
            FormFocus::Role => Some(&mut self.role_cursor),
            FormFocus::Attributes => Some(&mut self.attribute_cursor),
            FormFocus::League => Some(&mut self.league_cursor),
            FormFocus::Team => Some(&mut self.team_cursor),
            FormFocus::Submit => None,
        }
    }

    fn take_pending(&mut self, seq: u64) -> Option<SelectionState> {
        let matches = self
            .pending
            .as_ref()
            .is_some_and(|(pending_seq, _)| *pending_seq == seq);
        if !matches {
            return None;
        }
        self.pending.take().map(|(_, criteria)| criteria)
    }
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::AnalysisReady { seq, report } => {
            let Some(criteria) = state.take_pending(seq) else {
                state.push_log(format!("[INFO] Dropped stale analysis #{seq}"));
                return;
            };
            state.push_log(format!(
                "[INFO] Analysis #{seq}: {} similar players, {} in squad",
                report.similar_players.len(),
                report.team_players.len()
            ));
            state.report = Some(report);
            state.report_criteria = criteria;
            state.report_fetched_at = Some(SystemTime::now());
            state.report_scroll = 0;
            state.status = RequestStatus::Idle;
        }
        Delta::AnalysisFailed { seq, detail } => {
            if state.take_pending(seq).is_none() {
                state.push_log(format!("[INFO] Dropped stale failure #{seq}: {detail}"));
                return;
            }
            state.push_log(format!("[WARN] Analysis #{seq} failed: {detail}"));
            state.status = RequestStatus::Error(FETCH_FAILED_MSG.to_string());
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
