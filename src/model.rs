use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum VesselType {
    #[serde(rename = "Cargo Ship")]
    CargoShip,
    Tanker,
    #[serde(rename = "Container Ship")]
    ContainerShip,
    #[serde(rename = "Cruise Ship")]
    CruiseShip,
    #[serde(rename = "Fishing Vessel")]
    FishingVessel,
    Yacht,
    Ferry,
    #[serde(rename = "Bulk Carrier")]
    BulkCarrier,
}

impl VesselType {
    pub const ALL: [VesselType; 8] = [
        VesselType::CargoShip,
        VesselType::Tanker,
        VesselType::ContainerShip,
        VesselType::CruiseShip,
        VesselType::FishingVessel,
        VesselType::Yacht,
        VesselType::Ferry,
        VesselType::BulkCarrier,
    ];

    /// Display name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            VesselType::CargoShip => "Cargo Ship",
            VesselType::Tanker => "Tanker",
            VesselType::ContainerShip => "Container Ship",
            VesselType::CruiseShip => "Cruise Ship",
            VesselType::FishingVessel => "Fishing Vessel",
            VesselType::Yacht => "Yacht",
            VesselType::Ferry => "Ferry",
            VesselType::BulkCarrier => "Bulk Carrier",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Destination {
    #[serde(rename = "New York")]
    NewYork,
    London,
    Shanghai,
    Singapore,
    Rotterdam,
    #[serde(rename = "Hong Kong")]
    HongKong,
    #[serde(rename = "Los Angeles")]
    LosAngeles,
    Tokyo,
    Dubai,
    Sydney,
    Hamburg,
    Antwerp,
}

impl Destination {
    pub const ALL: [Destination; 12] = [
        Destination::NewYork,
        Destination::London,
        Destination::Shanghai,
        Destination::Singapore,
        Destination::Rotterdam,
        Destination::HongKong,
        Destination::LosAngeles,
        Destination::Tokyo,
        Destination::Dubai,
        Destination::Sydney,
        Destination::Hamburg,
        Destination::Antwerp,
    ];
}

/// Flag state the vessel is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Flag {
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "UK")]
    Uk,
    Panama,
    Liberia,
    #[serde(rename = "Marshall Islands")]
    MarshallIslands,
    Singapore,
    Malta,
    #[serde(rename = "Hong Kong")]
    HongKong,
    Greece,
    China,
    Japan,
    Norway,
}

impl Flag {
    pub const ALL: [Flag; 12] = [
        Flag::Usa,
        Flag::Uk,
        Flag::Panama,
        Flag::Liberia,
        Flag::MarshallIslands,
        Flag::Singapore,
        Flag::Malta,
        Flag::HongKong,
        Flag::Greece,
        Flag::China,
        Flag::Japan,
        Flag::Norway,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum NavigationalStatus {
    Underway,
    Anchored,
    Moored,
    #[serde(rename = "Restricted Maneuverability")]
    Restricted,
}

impl NavigationalStatus {
    pub const ALL: [NavigationalStatus; 4] = [
        NavigationalStatus::Underway,
        NavigationalStatus::Anchored,
        NavigationalStatus::Moored,
        NavigationalStatus::Restricted,
    ];
}

/// Entry of the ports file. Only the coordinates drive placement.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Port {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Port {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Port {
            latitude,
            longitude,
            name: None,
            country: None,
        }
    }
}

// Field order is the column order of the csv output.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Vessel {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub vessel_type: VesselType,
    pub latitude: f64,
    pub longitude: f64,
    pub heading: u16,
    pub speed: f64,
    pub destination: Destination,
    pub flag: Flag,
    pub length: u32,
    pub tonnage: u32,
    pub status: NavigationalStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vessel_type_serializes_to_display_name() {
        for vessel_type in VesselType::ALL {
            let json = serde_json::to_string(&vessel_type).unwrap();
            assert_eq!(json, format!("\"{}\"", vessel_type.as_str()));
        }
    }

    #[test]
    fn categorical_wire_names() {
        assert_eq!(
            serde_json::to_string(&Destination::LosAngeles).unwrap(),
            "\"Los Angeles\""
        );
        assert_eq!(
            serde_json::to_string(&Flag::MarshallIslands).unwrap(),
            "\"Marshall Islands\""
        );
        assert_eq!(serde_json::to_string(&Flag::Usa).unwrap(), "\"USA\"");
        assert_eq!(
            serde_json::to_string(&NavigationalStatus::Restricted).unwrap(),
            "\"Restricted Maneuverability\""
        );
    }

    #[test]
    fn vessel_uses_type_key() {
        let vessel = Vessel {
            id: "VESSEL-00001".to_string(),
            name: "Ferry A1".to_string(),
            vessel_type: VesselType::Yacht,
            latitude: 51.5,
            longitude: -0.1,
            heading: 90,
            speed: 12.3,
            destination: Destination::Antwerp,
            flag: Flag::Malta,
            length: 120,
            tonnage: 250_000,
            status: NavigationalStatus::Moored,
        };

        let value = serde_json::to_value(&vessel).unwrap();
        assert_eq!(value["type"], "Yacht");
        assert_eq!(value["status"], "Moored");
        assert!(value.get("vessel_type").is_none());
    }

    #[test]
    fn port_ignores_unknown_fields() {
        let json = r#"{"name": "London", "country": "UK", "latitude": 51.5, "longitude": -0.1, "size": "large"}"#;
        let port: Port = serde_json::from_str(json).unwrap();
        assert_eq!(port.latitude, 51.5);
        assert_eq!(port.longitude, -0.1);
        assert_eq!(port.name.as_deref(), Some("London"));

        let bare: Port = serde_json::from_str(r#"{"latitude": 1.0, "longitude": 2.0}"#).unwrap();
        assert_eq!(bare, Port::new(1.0, 2.0));
    }

    #[test]
    fn port_requires_coordinates() {
        assert!(serde_json::from_str::<Port>(r#"{"name": "Nowhere"}"#).is_err());
    }
}
