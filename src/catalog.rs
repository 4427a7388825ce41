pub const LEAGUES: &[(&str, &[&str])] = &[
    (
        "Premier League",
        &[
            "Arsenal",
            "Aston Villa",
            "Bournemouth",
            "Brentford",
            "Brighton",
            "Burnley",
            "Chelsea",
            "Crystal Palace",
            "Everton",
            "Fulham",
            "Liverpool",
            "Luton Town",
            "Manchester City",
            "Manchester Utd",
            "Newcastle Utd",
            "Nott'ham Forest",
            "Sheffield Utd",
            "Tottenham",
            "West Ham",
            "Wolves",
        ],
    ),
    (
        "La Liga",
        &[
            "Alavés",
            "Almería",
            "Athletic Club",
            "Atlético Madrid",
            "Barcelona",
            "Betis",
            "Cádiz",
            "Celta Vigo",
            "Getafe",
            "Girona",
            "Granada",
            "Las Palmas",
            "Mallorca",
            "Osasuna",
            "Rayo Vallecano",
            "Real Madrid",
            "Real Sociedad",
            "Sevilla",
            "Valencia",
            "Villarreal",
        ],
    ),
    (
        "Bundesliga",
        &[
            "Augsburg",
            "Bayern Munich",
            "Bochum",
            "Darmstadt 98",
            "Dortmund",
            "Eint Frankfurt",
            "Freiburg",
            "Gladbach",
            "Heidenheim",
            "Hoffenheim",
            "Köln",
            "Leverkusen",
            "Mainz 05",
            "RB Leipzig",
            "Stuttgart",
            "Union Berlin",
            "Werder Bremen",
            "Wolfsburg",
        ],
    ),
    (
        "Serie A",
        &[
            "Atalanta",
            "Bologna",
            "Cagliari",
            "Empoli",
            "Fiorentina",
            "Frosinone",
            "Genoa",
            "Hellas Verona",
            "Inter",
            "Juventus",
            "Lazio",
            "Lecce",
            "Milan",
            "Monza",
            "Napoli",
            "Roma",
            "Salernitana",
            "Sassuolo",
            "Torino",
            "Udinese",
        ],
    ),
    (
        "Ligue 1",
        &[
            "Brest",
            "Clermont Foot",
            "Le Havre",
            "Lens",
            "Lille",
            "Lorient",
            "Lyon",
            "Marseille",
            "Metz",
            "Monaco",
            "Montpellier",
            "Nantes",
            "Nice",
            "Paris S-G",
            "Reims",
            "Rennes",
            "Strasbourg",
            "Toulouse",
        ],
    ),
];

pub const ROLES: &[(&str, &[&str])] = &[
    (
        "Forward",
        &[
            "Goals",
            "Shots on Target",
            "Shots On Target Per 90",
            "Goals/Shots on target",
            "Penalty Kicks Made",
            "xG (Expected Goals)",
            "Shot-creating actions",
        ],
    ),
    (
        "Winger",
        &[
            "Goals",
            "Shots on Target",
            "Shots On Target Per 90",
            "Goals/Shots on target",
            "Penalty Kicks Made",
            "xG (Expected Goals)",
            "Shots from Freekick",
            "Assists",
            "xA (Expected Assists)",
            "Key Passes",
            "Crosses into Penalty Area",
        ],
    ),
    (
        "Attacking Mid",
        &[
            "Goals",
            "Shots on Target",
            "Shots On Target Per 90",
            "Goals/Shots on target",
            "Penalty Kicks Made",
            "xG (Expected Goals)",
            "Shots from Freekick",
            "Assists",
            "xA (Expected Assists)",
            "Key Passes",
            "Crosses into Penalty Area",
            "Progressive Passes",
            "Completed Passes Total",
            "Passes into Penalty Area",
        ],
    ),
    (
        "Centre Mid",
        &[
            "Crosses into Penalty Area",
            "Progressive Passes",
            "Completed Passes Total",
            "Assists",
            "xA (Expected Assists)",
            "Successful Take-On%",
            "Carries",
            "Tackles Won",
            "% of Dribblers Tackled",
            "Blocks",
            "Passes Block",
            "Interceptions",
            "Clearances",
        ],
    ),
    (
        "Fullback",
        &[
            "Tackles Won",
            "% of Dribblers Tackled",
            "Blocks",
            "Passes Block",
            "Interceptions",
            "Clearances",
            "Successful Take-On%",
            "Crosses into Penalty Area",
            "Progressive Passes",
            "Completed Passes Total",
            "Assists",
            "xA (Expected Assists)",
            "Carries",
            "Passes into Penalty Area",
            "Key Passes",
        ],
    ),
    (
        "Centre Defense",
        &[
            "Tackles Won",
            "% of Dribblers Tackled",
            "Blocks",
            "Passes Block",
            "Interceptions",
            "Clearances",
            "Carries",
            "Successful Take-On%",
            "Ball Recoveries",
            "% of Aerial Duels Won",
        ],
    ),
    (
        "Goalkeeping",
        &[
            "Goals Against /90",
            "Save Percentage",
            "Clean Sheet Percentage",
            "Penalty Kicks Saved %",
            "Passes Completed (Launched)",
            "Crosses Stopped",
            "% of Passes that were Launched",
            "Assists",
            "xA (Expected Assists)",
        ],
    ),
];

// Several labels share a backend column ("Completed Passes Total" and
// "Passes Completed (Launched)" both read Cmp%).
pub const ATTRIBUTE_CODES: &[(&str, &str)] = &[
    ("Goals", "Gls"),
    ("Shots on Target", "SoT"),
    ("Shots On Target Per 90", "SoT/90"),
    ("Goals/Shots on target", "G/SoT"),
    ("Penalty Kicks Made", "PK"),
    ("xG (Expected Goals)", "xG"),
    ("Shot-creating actions", "SCA"),
    ("Shots from Freekick", "FK"),
    ("Assists", "Ast"),
    ("xA (Expected Assists)", "xA"),
    ("Key Passes", "KP"),
    ("Crosses into Penalty Area", "CrsPA"),
    ("Progressive Passes", "PrgP"),
    ("Completed Passes Total", "Cmp%"),
    ("Passes into Penalty Area", "PPA"),
    ("Successful Take-On%", "Succ%"),
    ("Carries", "Carries"),
    ("Tackles Won", "TklW"),
    ("% of Dribblers Tackled", "Tkl%"),
    ("Blocks", "Blocks"),
    ("Passes Block", "Pass"),
    ("Interceptions", "Int"),
    ("Clearances", "Clr"),
    ("Ball Recoveries", "Recov"),
    ("% of Aerial Duels Won", "Won%"),
    ("Goals Against /90", "GA90"),
    ("Save Percentage", "Save%"),
    ("Clean Sheet Percentage", "CS%"),
    ("Penalty Kicks Saved %", "Save%2"),
    ("Passes Completed (Launched)", "Cmp%"),
    ("Crosses Stopped", "Stp%"),
    ("% of Passes that were Launched", "Launch%"),
];

pub fn league_names() -> impl Iterator<Item = &'static str> {
    LEAGUES.iter().map(|(name, _)| *name)
}

pub fn role_names() -> impl Iterator<Item = &'static str> {
    ROLES.iter().map(|(name, _)| *name)
}

pub fn teams_for_league(league: &str) -> &'static [&'static str] {
    LEAGUES
        .iter()
        .find(|(name, _)| *name == league)
        .map(|(_, teams)| *teams)
        .unwrap_or(&[])
}

pub fn attributes_for_role(role: &str) -> &'static [&'static str] {
    ROLES
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, attrs)| *attrs)
        .unwrap_or(&[])
}

/// Backend column code for an attribute label. Unknown labels pass through.
pub fn attribute_code(label: &str) -> &str {
    ATTRIBUTE_CODES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, code)| *code)
        .unwrap_or(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_attribute_has_a_code() {
        for (role, attrs) in ROLES {
            for attr in *attrs {
                assert!(
                    ATTRIBUTE_CODES.iter().any(|(label, _)| label == attr),
                    "{role}: {attr} has no backend code"
                );
            }
        }
    }

    #[test]
    fn unknown_lookups_are_empty() {
        assert!(teams_for_league("Eredivisie").is_empty());
        assert!(attributes_for_role("Sweeper").is_empty());
        assert_eq!(attribute_code("Dribbles"), "Dribbles");
    }
}
