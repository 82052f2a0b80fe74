//! End-to-end properties of the calculation core, exercised on the embedded
//! route dataset.

use ecotrip::models::{CityRoute, TransportMode};
use ecotrip::services::route_table::RouteTable;
use ecotrip::services::{comparison, credit, emission, presenter};

fn embedded_routes() -> Vec<CityRoute> {
    serde_json::from_str(ecotrip::EMBEDDED_ROUTES_JSON).unwrap()
}

fn embedded_table() -> RouteTable {
    RouteTable::from_json_str(ecotrip::EMBEDDED_ROUTES_JSON).unwrap()
}

#[test]
fn test_every_stored_route_resolves_in_both_orientations() {
    let table = embedded_table();
    for route in embedded_routes() {
        assert_eq!(
            table.find_distance(&route.origin, &route.destination),
            Some(route.distance_km),
            "forward lookup failed for {} - {}",
            route.origin,
            route.destination
        );
        assert_eq!(
            table.find_distance(&route.destination, &route.origin),
            Some(route.distance_km),
            "reverse lookup failed for {} - {}",
            route.origin,
            route.destination
        );
    }
}

#[test]
fn test_lookup_ignores_case_and_surrounding_whitespace() {
    let table = embedded_table();
    assert_eq!(
        table.find_distance(" são paulo, sp ", "RIO DE JANEIRO, RJ"),
        table.find_distance("São Paulo, SP", "Rio de Janeiro, RJ"),
    );
    assert_eq!(
        table.find_distance("São Paulo, SP", "Rio de Janeiro, RJ"),
        Some(430.0)
    );
}

#[test]
fn test_city_enumeration_is_sorted_without_duplicates() {
    let cities = embedded_table().cities();
    assert!(!cities.is_empty());
    for pair in cities.windows(2) {
        assert!(pair[0] < pair[1], "{:?} not strictly before {:?}", pair[0], pair[1]);
    }
}

#[test]
fn test_reference_trip_emissions() {
    assert_eq!(emission::emission(430.0, TransportMode::Car).unwrap(), 51.6);
    assert_eq!(emission::emission(430.0, TransportMode::Bus).unwrap(), 34.4);
    assert_eq!(
        emission::emission(430.0, TransportMode::Truck).unwrap(),
        412.8
    );
    for route in embedded_routes() {
        assert_eq!(
            emission::emission(route.distance_km, TransportMode::Bicycle).unwrap(),
            0.0
        );
    }
}

#[test]
fn test_comparison_over_reference_trip() {
    let results = comparison::all_modes(430.0).unwrap();
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].mode, TransportMode::Bicycle);
    assert_eq!(results[0].emission_kg, 0.0);
    assert_eq!(results[3].mode, TransportMode::Truck);
    assert_eq!(results[3].emission_kg, 412.8);

    let car = results
        .iter()
        .find(|r| r.mode == TransportMode::Car)
        .unwrap();
    assert_eq!(car.percentage_vs_car, 100.0);
}

#[test]
fn test_savings_fixed_points() {
    let same = comparison::savings(51.6, 51.6);
    assert_eq!(same.saved_kg, 0.0);
    assert_eq!(same.percentage, 0.0);

    let full = comparison::savings(0.0, 51.6);
    assert_eq!(full.saved_kg, 51.6);
    assert_eq!(full.percentage, 100.0);
}

#[test]
fn test_credit_fixed_points() {
    assert_eq!(credit::credits_for(1000.0), 1.0);

    let price = credit::price_for(1.0);
    assert_eq!(price.min, 50.0);
    assert_eq!(price.max, 150.0);
    assert_eq!(price.average, 100.0);
}

#[test]
fn test_core_functions_are_idempotent() {
    let table = embedded_table();
    assert_eq!(
        table.find_distance("São Paulo, SP", "Salvador, BA"),
        table.find_distance("São Paulo, SP", "Salvador, BA")
    );
    assert_eq!(table.cities(), table.cities());
    assert_eq!(
        emission::emission(1962.0, TransportMode::Truck).unwrap(),
        emission::emission(1962.0, TransportMode::Truck).unwrap()
    );
    assert_eq!(
        comparison::all_modes(1962.0).unwrap(),
        comparison::all_modes(1962.0).unwrap()
    );
    assert_eq!(credit::credits_for(51.6), credit::credits_for(51.6));
}

#[test]
fn test_formatting_never_rerounds() {
    // longest trip by truck: 1962 km * 0.96 = 1883.52 kg
    let kg = emission::emission(1962.0, TransportMode::Truck).unwrap();
    assert_eq!(kg, 1883.52);
    assert_eq!(presenter::format_decimal(kg, 2), "1.883,52");
    assert_eq!(presenter::format_brl(100.0), "R$ 100,00");
}
