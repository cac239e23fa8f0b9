use std::fmt;

/// One administrative region covered by the annex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionId {
    Jihocesky,
    Jihomoravsky,
    Karlovarsky,
    Kralovehradecky,
    Liberecky,
    Moravskoslezsky,
    Olomoucky,
    Pardubicky,
    Plzensky,
    Praha,
    Stredocesky,
    Ustecky,
    Vysocina,
    Zlinsky,
}

impl RegionId {
    pub const ALL: [RegionId; 14] = [
        RegionId::Jihocesky,
        RegionId::Jihomoravsky,
        RegionId::Karlovarsky,
        RegionId::Kralovehradecky,
        RegionId::Liberecky,
        RegionId::Moravskoslezsky,
        RegionId::Olomoucky,
        RegionId::Pardubicky,
        RegionId::Plzensky,
        RegionId::Praha,
        RegionId::Stredocesky,
        RegionId::Ustecky,
        RegionId::Vysocina,
        RegionId::Zlinsky,
    ];

    /// Display name used as the key in every output.
    pub fn name(self) -> &'static str {
        match self {
            RegionId::Jihocesky => "Jihočeský kraj",
            RegionId::Jihomoravsky => "Jihomoravský kraj",
            RegionId::Karlovarsky => "Karlovarský kraj",
            RegionId::Kralovehradecky => "Královéhradecký kraj",
            RegionId::Liberecky => "Liberecký kraj",
            RegionId::Moravskoslezsky => "Moravskoslezský kraj",
            RegionId::Olomoucky => "Olomoucký kraj",
            RegionId::Pardubicky => "Pardubický kraj",
            RegionId::Plzensky => "Plzeňský kraj",
            RegionId::Praha => "Hl. m. Praha",
            RegionId::Stredocesky => "Středočeský kraj",
            RegionId::Ustecky => "Ústecký kraj",
            RegionId::Vysocina => "Vysočina",
            RegionId::Zlinsky => "Zlínský kraj",
        }
    }

    /// Lookup by display name, case-insensitive. Also accepts the distinctive
    /// word alone ("Zlínský", "Praha").
    pub fn from_name(name: &str) -> Option<RegionId> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        RegionId::ALL.into_iter().find(|r| {
            let full = r.name().to_lowercase();
            full == wanted
                || full
                    .split_whitespace()
                    .filter(|w| !matches!(*w, "kraj" | "hl." | "m."))
                    .any(|w| w == wanted)
        })
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
