//! # Profile Input
//!
//! Shared flags for subcommands that take a business profile. The
//! profile can come from a JSON file, from inline flags, or both, with
//! flags applied on top of the file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use permit_core::BusinessProfile;

/// Business profile input, as a file and/or inline flags.
#[derive(Args, Debug, Default)]
pub struct ProfileOpts {
    /// Path to a JSON business profile file.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Business name used to address the report.
    #[arg(long)]
    pub name: Option<String>,

    /// Number of seats.
    #[arg(long)]
    pub seats: Option<u32>,

    /// Floor area in square meters.
    #[arg(long)]
    pub area_m2: Option<f64>,

    /// The business serves alcohol.
    #[arg(long)]
    pub serves_alcohol: bool,

    /// The business cooks with gas.
    #[arg(long)]
    pub uses_gas: bool,

    /// The business offers deliveries.
    #[arg(long)]
    pub deliveries: bool,

    /// The business serves meat.
    #[arg(long)]
    pub serves_meat: bool,
}

impl ProfileOpts {
    /// Build the profile: start from `--profile <file>` when given
    /// (declared defaults otherwise), then apply inline flags on top.
    pub fn load(&self) -> Result<BusinessProfile> {
        let mut profile = match &self.profile {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read profile: {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("invalid profile JSON: {}", path.display()))?
            }
            None => BusinessProfile::default(),
        };

        if let Some(name) = &self.name {
            profile.business_name = Some(name.clone());
        }
        if let Some(seats) = self.seats {
            profile.seats = seats;
        }
        if let Some(area_m2) = self.area_m2 {
            profile.area_m2 = area_m2;
        }
        if self.serves_alcohol {
            profile.serves_alcohol = true;
        }
        if self.uses_gas {
            profile.uses_gas = true;
        }
        if self.deliveries {
            profile.deliveries = true;
        }
        if self.serves_meat {
            profile.serves_meat = true;
        }

        Ok(profile)
    }
}
