//! Campaign catalog - the contracts on offer

use serde::Deserialize;

use crate::catalog::CatalogLoadError;
use crate::core::types::{CampaignId, MissionId};
use crate::model::campaign::{Campaign, CampaignStatus};
use crate::model::mission::{
    Difficulty, Mission, MissionKind, MissionRequirements, MissionRisks, MissionStatus,
    Objectives, RecommendedEquipment, RecommendedSkills,
};

/// Catalog of campaigns available for acceptance
///
/// Campaigns are looked up by name. Each call to [`with_defaults`] or a
/// TOML load mints fresh campaign and mission ids.
///
/// [`with_defaults`]: CampaignCatalog::with_defaults
#[derive(Debug, Clone, Default)]
pub struct CampaignCatalog {
    contracts: Vec<Campaign>,
}

impl CampaignCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock contract board
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();

        catalog.add(Campaign {
            id: CampaignId::new(),
            name: "Border Skirmish".into(),
            description: "Protect the border colonies from pirate raids".into(),
            missions: vec![
                Mission {
                    id: MissionId::new(),
                    name: "Patrol Route Alpha".into(),
                    description: "Establish presence in the sector".into(),
                    difficulty: Difficulty::Easy,
                    kind: Some(MissionKind::Patrol),
                    reward: 2000,
                    duration_days: 1,
                    requirements: MissionRequirements {
                        min_pilots: 2,
                        min_combat_rating: 40.0,
                        recommended_equipment: Some(RecommendedEquipment {
                            weapons: true,
                            missiles: true,
                            flares: true,
                            ..Default::default()
                        }),
                        recommended_skills: Some(RecommendedSkills {
                            air_to_air: Some(40),
                            maneuver: Some(35),
                            ..Default::default()
                        }),
                    },
                    risks: Some(MissionRisks {
                        pilot_injury: 0.1,
                        equipment_loss: 0.15,
                        fighter_damage: 0.2,
                    }),
                    objectives: Some(Objectives {
                        primary: "Patrol the designated route and detect any hostile activity"
                            .into(),
                        secondary: Some("Map any anomalies in the sector".into()),
                    }),
                    status: MissionStatus::Pending,
                },
                Mission {
                    id: MissionId::new(),
                    name: "Intercept Raiders".into(),
                    description: "Stop pirate raiders from attacking a colony".into(),
                    difficulty: Difficulty::Medium,
                    kind: Some(MissionKind::Intercept),
                    reward: 3500,
                    duration_days: 2,
                    requirements: MissionRequirements {
                        min_pilots: 3,
                        min_combat_rating: 55.0,
                        recommended_equipment: Some(RecommendedEquipment {
                            weapons: true,
                            missiles: true,
                            flares: true,
                            ..Default::default()
                        }),
                        recommended_skills: Some(RecommendedSkills {
                            air_to_air: Some(50),
                            maneuver: Some(45),
                            eccm: Some(40),
                            ..Default::default()
                        }),
                    },
                    risks: Some(MissionRisks {
                        pilot_injury: 0.2,
                        equipment_loss: 0.25,
                        fighter_damage: 0.3,
                    }),
                    objectives: Some(Objectives {
                        primary: "Prevent raiders from reaching the colony".into(),
                        secondary: Some("Destroy or capture raider vessels".into()),
                    }),
                    status: MissionStatus::Pending,
                },
            ],
            duration_days: 7,
            current_day: 0,
            status: CampaignStatus::Pending,
            reward: 10000,
        });

        catalog.add(Campaign {
            id: CampaignId::new(),
            name: "Corporate Security".into(),
            description: "Provide security for corporate mining operations".into(),
            missions: vec![
                Mission {
                    id: MissionId::new(),
                    name: "Escort Mining Ships".into(),
                    description: "Protect mining vessels during operations".into(),
                    difficulty: Difficulty::Medium,
                    kind: Some(MissionKind::Escort),
                    reward: 3000,
                    duration_days: 2,
                    requirements: MissionRequirements {
                        min_pilots: 2,
                        min_combat_rating: 50.0,
                        recommended_equipment: Some(RecommendedEquipment {
                            weapons: true,
                            missiles: true,
                            flares: true,
                            ..Default::default()
                        }),
                        recommended_skills: Some(RecommendedSkills {
                            air_to_air: Some(45),
                            eccm: Some(40),
                            survival: Some(35),
                            ..Default::default()
                        }),
                    },
                    risks: Some(MissionRisks {
                        pilot_injury: 0.15,
                        equipment_loss: 0.2,
                        fighter_damage: 0.25,
                    }),
                    objectives: Some(Objectives {
                        primary: "Protect mining vessels from hostile forces".into(),
                        secondary: Some("Ensure no mining operations are interrupted".into()),
                    }),
                    status: MissionStatus::Pending,
                },
                Mission {
                    id: MissionId::new(),
                    name: "Defend Processing Station".into(),
                    description: "Protect the main processing facility from attack".into(),
                    difficulty: Difficulty::Hard,
                    kind: Some(MissionKind::Strike),
                    reward: 5000,
                    duration_days: 3,
                    requirements: MissionRequirements {
                        min_pilots: 4,
                        min_combat_rating: 65.0,
                        recommended_equipment: Some(RecommendedEquipment {
                            weapons: true,
                            missiles: true,
                            bombs: true,
                            flares: true,
                        }),
                        recommended_skills: Some(RecommendedSkills {
                            air_to_ground: Some(60),
                            air_to_air: Some(55),
                            survival: Some(50),
                            ..Default::default()
                        }),
                    },
                    risks: Some(MissionRisks {
                        pilot_injury: 0.3,
                        equipment_loss: 0.35,
                        fighter_damage: 0.4,
                    }),
                    objectives: Some(Objectives {
                        primary: "Defend the processing station from enemy forces".into(),
                        secondary: Some("Eliminate all hostile ground installations".into()),
                    }),
                    status: MissionStatus::Pending,
                },
            ],
            duration_days: 10,
            current_day: 0,
            status: CampaignStatus::Pending,
            reward: 15000,
        });

        catalog
    }

    /// Add a campaign to the catalog
    pub fn add(&mut self, campaign: Campaign) {
        self.contracts.push(campaign);
    }

    /// Get a campaign by name
    pub fn get(&self, name: &str) -> Option<&Campaign> {
        self.contracts.iter().find(|c| c.name == name)
    }

    /// All campaigns on offer
    pub fn all(&self) -> &[Campaign] {
        &self.contracts
    }

    /// Load a catalog from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> Result<Self, CatalogLoadError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogLoadError::IoError(e.to_string()))?;
        Self::parse_toml(&content)
    }

    /// Parse a catalog from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self, CatalogLoadError> {
        let toml_data: TomlCampaignFile = toml::from_str(content)
            .map_err(|e| CatalogLoadError::ParseError(e.to_string()))?;

        let mut catalog = Self::new();
        for campaign in toml_data.campaigns {
            catalog.add(campaign.into_campaign()?);
        }
        Ok(catalog)
    }
}

/// TOML representation of the campaigns file
#[derive(Debug, Deserialize)]
struct TomlCampaignFile {
    campaigns: Vec<TomlCampaign>,
}

/// TOML representation of a campaign
#[derive(Debug, Deserialize)]
struct TomlCampaign {
    name: String,
    #[serde(default)]
    description: String,
    duration_days: u32,
    reward: i64,
    missions: Vec<TomlMission>,
}

/// TOML representation of a mission
///
/// Difficulty and kind come in as strings; the nested requirement, risk,
/// and objective tables deserialize straight into the model types.
#[derive(Debug, Deserialize)]
struct TomlMission {
    name: String,
    #[serde(default)]
    description: String,
    difficulty: String,
    kind: Option<String>,
    reward: i64,
    duration_days: u32,
    requirements: MissionRequirements,
    risks: Option<MissionRisks>,
    objectives: Option<Objectives>,
}

impl TomlCampaign {
    fn into_campaign(self) -> Result<Campaign, CatalogLoadError> {
        let missions = self
            .missions
            .into_iter()
            .map(|m| m.into_mission())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Campaign {
            id: CampaignId::new(),
            name: self.name,
            description: self.description,
            missions,
            duration_days: self.duration_days,
            current_day: 0,
            status: CampaignStatus::Pending,
            reward: self.reward,
        })
    }
}

impl TomlMission {
    fn into_mission(self) -> Result<Mission, CatalogLoadError> {
        let difficulty = match self.difficulty.to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => return Err(CatalogLoadError::InvalidDifficulty(self.difficulty)),
        };

        let kind = match self.kind {
            Some(k) => Some(match k.to_lowercase().as_str() {
                "patrol" => MissionKind::Patrol,
                "escort" => MissionKind::Escort,
                "strike" => MissionKind::Strike,
                "intercept" => MissionKind::Intercept,
                "recon" => MissionKind::Recon,
                _ => return Err(CatalogLoadError::InvalidMissionKind(k)),
            }),
            None => None,
        };

        Ok(Mission {
            id: MissionId::new(),
            name: self.name,
            description: self.description,
            difficulty,
            kind,
            reward: self.reward,
            duration_days: self.duration_days,
            requirements: self.requirements,
            risks: self.risks,
            objectives: self.objectives,
            status: MissionStatus::Pending,
        })
    }
}
