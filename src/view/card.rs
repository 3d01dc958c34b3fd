// src/view/card.rs

use crate::api::Institution;
use crate::domain::split_service_types;
use url::Url;

const MAP_URL: &str = "https://www.google.com/maps";
const MAP_ZOOM: &str = "15";

/// A result card, flattened from an `Institution` into exactly what the page
/// shows. Optional lines are `None` when the backend left them blank.
#[derive(Debug, Clone, PartialEq)]
pub struct InstitutionCard {
    pub name: String,
    pub kind: Option<String>,
    pub address: String,
    pub badges: Vec<String>,
    pub phone: Option<ContactLink>,
    pub email: Option<ContactLink>,
    pub manager: Option<String>,
    pub code: String,
    pub contract: ContractPeriod,
    pub map: Option<MapLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractPeriod {
    pub start: String,
    pub end: String,
}

/// External map view centred on the institution. `coordinates` is the
/// `lat,lng` text the link was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLink {
    pub coordinates: String,
    pub href: String,
}

pub fn render_institution_card(institution: &Institution) -> InstitutionCard {
    let phone = present(institution.phone.as_deref()).map(|phone| ContactLink {
        href: format!("tel:{phone}"),
        label: phone,
    });

    let email = present(institution.email.as_deref()).map(|email| ContactLink {
        href: format!("mailto:{email}"),
        label: email,
    });

    let map = match (institution.latitude, institution.longitude) {
        (Some(lat), Some(lng)) => map_link(lat, lng),
        _ => None,
    };

    InstitutionCard {
        name: institution.name.clone(),
        kind: present(institution.kind.as_deref()),
        address: institution.address.clone(),
        badges: split_service_types(institution.service_type.as_deref()),
        phone,
        email,
        manager: present(institution.manager.as_deref()),
        code: institution.code.clone(),
        contract: ContractPeriod {
            start: institution.contract_start.clone(),
            end: institution.contract_end.clone(),
        },
        map,
    }
}

fn map_link(latitude: f64, longitude: f64) -> Option<MapLink> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }

    let coordinates = format!("{latitude},{longitude}");
    let href = Url::parse_with_params(
        MAP_URL,
        &[("q", coordinates.as_str()), ("z", MAP_ZOOM), ("t", "m")],
    )
    .ok()?
    .to_string();

    Some(MapLink { coordinates, href })
}

fn present(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
