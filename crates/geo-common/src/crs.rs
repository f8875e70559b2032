//! Coordinate Reference System identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Well-known CRS codes understood by the projection crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrsCode {
    /// WGS84 Geographic, treated as an equirectangular (Plate Carree) plane
    Epsg4326,
    /// Web Mercator (meters, latitudes clipped at ~85.05°)
    Epsg3857,
    /// World Mercator (meters, latitudes -80° to 84°)
    Epsg3395,
    /// Lambert Conformal Conic centred on CONUS
    LambertConformal,
}

impl FromStr for CrsCode {
    type Err = CrsParseError;

    /// Parse a CRS identifier.
    ///
    /// Accepts formats like:
    /// - "EPSG:4326"
    /// - "epsg:4326"
    /// - "CRS:84" (equivalent to EPSG:4326 with lon/lat axis order)
    /// - projection names such as "PlateCarree", "Mercator" or "LambertConformal"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "EPSG:4326" | "CRS:84" | "PLATECARREE" => Ok(CrsCode::Epsg4326),
            "EPSG:3857" | "EPSG:900913" | "GOOGLEMERCATOR" => Ok(CrsCode::Epsg3857),
            "EPSG:3395" | "MERCATOR" => Ok(CrsCode::Epsg3395),
            "LAMBERTCONFORMAL" | "LCC" => Ok(CrsCode::LambertConformal),
            _ => Err(CrsParseError::UnsupportedCrs(s.to_string())),
        }
    }
}

impl fmt::Display for CrsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            CrsCode::Epsg4326 => "EPSG:4326",
            CrsCode::Epsg3857 => "EPSG:3857",
            CrsCode::Epsg3395 => "EPSG:3395",
            CrsCode::LambertConformal => "LambertConformal",
        };
        write!(f, "{}", code)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CrsParseError {
    #[error("Unsupported CRS: {0}")]
    UnsupportedCrs(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_crs() {
        assert_eq!(
            "EPSG:4326".parse::<CrsCode>().unwrap(),
            CrsCode::Epsg4326
        );
        assert_eq!(
            "epsg:3857".parse::<CrsCode>().unwrap(),
            CrsCode::Epsg3857
        );
        assert_eq!(
            "CRS:84".parse::<CrsCode>().unwrap(),
            CrsCode::Epsg4326
        );
        assert_eq!(
            "PlateCarree".parse::<CrsCode>().unwrap(),
            CrsCode::Epsg4326
        );
        assert_eq!(
            "lcc".parse::<CrsCode>().unwrap(),
            CrsCode::LambertConformal
        );
        assert!("EPSG:99999".parse::<CrsCode>().is_err());
    }

    #[test]
    fn test_parse_error_converts_into_geo_error() {
        fn parse(s: &str) -> crate::GeoResult<CrsCode> {
            Ok(s.parse()?)
        }

        let err = parse("EPSG:99999").unwrap_err();
        assert!(matches!(
            err,
            crate::GeoError::Crs(CrsParseError::UnsupportedCrs(_))
        ));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for code in [
            CrsCode::Epsg4326,
            CrsCode::Epsg3857,
            CrsCode::Epsg3395,
            CrsCode::LambertConformal,
        ] {
            assert_eq!(code.to_string().parse::<CrsCode>().unwrap(), code);
        }
    }
}
