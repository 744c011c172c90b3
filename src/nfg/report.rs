use crate::profile::Profile;

/// Equilibria of one game, as handed to a renderer.
/// Kinds that were not asked for are left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psne: Option<Vec<Profile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vwdse: Option<Vec<Profile>>,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let sections = [("PSNE", &self.psne), ("VWDSE", &self.vwdse)];
        for (name, profiles) in sections {
            if let Some(profiles) = profiles {
                writeln!(f, "{} ({})", name, profiles.len())?;
                for profile in profiles {
                    writeln!(f, "{}", profile)?;
                }
            }
        }
        Ok(())
    }
}
