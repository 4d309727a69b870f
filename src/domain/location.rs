#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
    pub timezone: Option<String>,
    pub population: Option<u64>,
}

impl Location {
    #[must_use]
    pub fn from_coords(lat: f64, lon: f64) -> Self {
        Self {
            name: coords_label(lat, lon),
            latitude: lat,
            longitude: lon,
            country: None,
            admin1: None,
            timezone: None,
            population: None,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.admin1, &self.country) {
            (Some(admin), Some(country)) if admin != &self.name => {
                format!("{}, {}, {}", self.name, admin, country)
            }
            (_, Some(country)) => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }

    #[must_use]
    pub fn coords_label(&self) -> String {
        coords_label(self.latitude, self.longitude)
    }
}

fn coords_label(lat: f64, lon: f64) -> String {
    format!("{lat:.4}, {lon:.4}")
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeResolution {
    Selected(Location),
    NeedsDisambiguation(Vec<Location>),
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_skips_duplicate_admin_region() {
        let mut loc = Location::from_coords(59.3293, 18.0686);
        assert_eq!(loc.display_name(), "59.3293, 18.0686");

        loc.name = "Lisboa".to_string();
        loc.admin1 = Some("Lisboa".to_string());
        loc.country = Some("Portugal".to_string());
        assert_eq!(loc.display_name(), "Lisboa, Portugal");

        loc.name = "Sintra".to_string();
        assert_eq!(loc.display_name(), "Sintra, Lisboa, Portugal");
    }
}
