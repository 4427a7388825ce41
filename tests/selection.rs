use talentvision_terminal::catalog;
use talentvision_terminal::state::{AppState, FormFocus, SelectionState};

#[test]
fn role_change_clears_attributes_even_when_labels_overlap() {
    let mut sel = SelectionState::default();
    sel.set_role("Forward");
    sel.toggle_attribute("Goals");
    sel.toggle_attribute("xG (Expected Goals)");
    assert_eq!(sel.attributes.len(), 2);

    // Winger shares both labels with Forward.
    sel.set_role("Winger");
    assert_eq!(sel.role.as_deref(), Some("Winger"));
    assert!(sel.attributes.is_empty());

    sel.toggle_attribute("Assists");
    sel.set_role("Winger");
    assert!(sel.attributes.is_empty());
}

#[test]
fn league_change_clears_team() {
    let mut sel = SelectionState::default();
    sel.set_league("Premier League");
    sel.set_team("Arsenal");
    assert_eq!(sel.team.as_deref(), Some("Arsenal"));

    sel.set_league("La Liga");
    assert_eq!(sel.league.as_deref(), Some("La Liga"));
    assert_eq!(sel.team, None);

    sel.set_team("Girona");
    sel.set_league("La Liga");
    assert_eq!(sel.team, None);
}

#[test]
fn set_team_leaves_other_fields_alone() {
    let mut sel = SelectionState::default();
    sel.set_role("Fullback");
    sel.toggle_attribute("Carries");
    sel.set_league("Serie A");
    sel.set_team("Roma");
    sel.set_team("Lazio");

    assert_eq!(sel.role.as_deref(), Some("Fullback"));
    assert_eq!(sel.attributes, vec!["Carries".to_string()]);
    assert_eq!(sel.league.as_deref(), Some("Serie A"));
    assert_eq!(sel.team.as_deref(), Some("Lazio"));
}

#[test]
fn toggling_twice_restores_the_original_set() {
    let mut sel = SelectionState::default();
    sel.set_role("Centre Mid");
    sel.toggle_attribute("Carries");
    sel.toggle_attribute("Blocks");
    let before = sel.attributes.clone();

    sel.toggle_attribute("Interceptions");
    sel.toggle_attribute("Interceptions");
    assert_eq!(sel.attributes, before);

    sel.toggle_attribute("Carries");
    assert_eq!(sel.attributes, vec!["Blocks".to_string()]);
    sel.toggle_attribute("Carries");
    assert_eq!(
        sel.attributes,
        vec!["Blocks".to_string(), "Carries".to_string()]
    );
}

#[test]
fn empty_value_resets_to_placeholder() {
    let mut sel = SelectionState::default();
    sel.set_role("Goalkeeping");
    sel.toggle_attribute("Save Percentage");
    sel.set_role("");
    assert_eq!(sel.role, None);
    assert!(sel.attributes.is_empty());

    sel.set_league("Ligue 1");
    sel.set_team("Lyon");
    sel.set_team("  ");
    assert_eq!(sel.team, None);
    assert_eq!(sel.league.as_deref(), Some("Ligue 1"));
}

#[test]
fn padded_values_are_stored_trimmed() {
    let mut sel = SelectionState::default();
    sel.set_role(" Forward ");
    sel.set_league("Premier League\t");
    sel.set_team("  Arsenal");
    assert_eq!(sel.role.as_deref(), Some("Forward"));
    assert_eq!(sel.league.as_deref(), Some("Premier League"));
    assert_eq!(sel.team.as_deref(), Some("Arsenal"));
}

#[test]
fn form_navigation_picks_from_catalogs() {
    let mut state = AppState::new();
    assert_eq!(state.focus, FormFocus::Role);

    // Attributes and Team are hidden until their parent is chosen.
    state.focus_next();
    assert_eq!(state.focus, FormFocus::League);
    state.focus_prev();
    assert_eq!(state.focus, FormFocus::Role);

    state.cursor_next();
    assert!(state.activate().is_none());
    assert_eq!(state.selection.role.as_deref(), Some("Winger"));

    state.focus_next();
    assert_eq!(state.focus, FormFocus::Attributes);
    state.cursor_next();
    state.activate();
    assert_eq!(state.selection.attributes, vec!["Shots on Target".to_string()]);

    state.focus_next();
    assert_eq!(state.focus, FormFocus::League);
    for _ in 0..10 {
        state.cursor_next();
    }
    assert_eq!(state.league_cursor, catalog::LEAGUES.len() - 1);
    state.activate();
    assert_eq!(state.selection.league.as_deref(), Some("Ligue 1"));

    state.focus_next();
    assert_eq!(state.focus, FormFocus::Team);
    state.activate();
    assert_eq!(state.selection.team.as_deref(), Some("Brest"));
    assert!(state.team_options().contains(&"Brest"));

    state.focus_next();
    assert_eq!(state.focus, FormFocus::Submit);
    state.focus_next();
    assert_eq!(state.focus, FormFocus::Role);
}

#[test]
fn clearing_league_hides_team_choices() {
    let mut state = AppState::new();
    state.set_league("Bundesliga");
    state.focus = FormFocus::Team;
    state.team_cursor = 4;
    state.activate();
    assert_eq!(state.selection.team.as_deref(), Some("Dortmund"));

    state.focus = FormFocus::League;
    state.clear_focused();
    assert_eq!(state.selection.league, None);
    assert_eq!(state.selection.team, None);
    assert!(state.team_options().is_empty());
    assert_eq!(state.team_cursor, 0);
}
