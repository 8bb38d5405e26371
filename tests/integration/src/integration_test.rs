//! End-to-end resolution against the checked-in fixture tree
//!
//! Exercises the complete flow: path resolution -> document loading ->
//! population, for every shipped vehicle.

use pretty_assertions::assert_eq;
use std::fs;
use velox_params::{
    ParameterGroup, ParameterResolver, TireParameters, TrailerParameters, VehicleId,
    VehicleParameters, parameters_vehicle1, parameters_vehicle4, setup_vehicle_parameters,
};
use velox_test_utils::fixtures::fixture_param_root;

#[test]
fn fixture_tree_has_every_vehicle() {
    let root = fixture_param_root();
    let resolver = ParameterResolver::new();

    for vehicle in VehicleId::ALL {
        let paths = resolver.document_paths(vehicle.id(), Some(root.as_path()));
        assert!(paths.vehicle.is_file(), "{vehicle}: {}", paths.vehicle.display());
        assert!(paths.tire.is_file());
    }
}

#[test]
fn every_fixture_vehicle_resolves() {
    let root = fixture_param_root();

    for vehicle in VehicleId::ALL {
        let params = vehicle.parameters(Some(root.as_path())).unwrap();
        assert!(params.m > 0.0, "{vehicle} has no mass");
        assert!(params.steering.max > 0.0, "{vehicle} has no steering range");
        assert_eq!(params.tire.p_cx1, 1.6411, "{vehicle} tire coefficients");
    }
}

#[test]
fn ford_escort_is_fully_populated() {
    let params = parameters_vehicle1(Some(fixture_param_root().as_path())).unwrap();

    assert_eq!(params.l, 4.298);
    assert_eq!(params.m, 1225.887);
    assert_eq!(params.i_phi_s, 244.047);
    assert_eq!(params.k_tsf, -12880.270);
    assert_eq!(params.k_lt, 1.0278e-5);
    assert_eq!(params.t_se, 1.0);
    assert_eq!(params.steering.kappa_dot_dot_max, 20.0);
    assert_eq!(params.longitudinal.j_max, 10.0e3);
    assert_eq!(params.trailer, TrailerParameters::default());
}

#[test]
fn nested_fixture_tire_document_fills_every_coefficient() {
    let params = parameters_vehicle1(Some(fixture_param_root().as_path())).unwrap();

    let set: Vec<&str> = TireParameters::KEYS
        .iter()
        .copied()
        .filter(|key| params.tire.get(key) != Some(0.0))
        .collect();
    // p_dx3 is zero in the fixture
    assert_eq!(set.len(), TireParameters::KEYS.len() - 1);
    assert_eq!(params.tire.r_vy6, -10.704);
}

#[test]
fn partial_vehicle_document_keeps_defaults() {
    let params = VehicleId::Bmw320i
        .parameters(Some(fixture_param_root().as_path()))
        .unwrap();

    assert_eq!(params.m, 1093.295);
    assert_eq!(params.steering.v_max, 0.4);
    assert_eq!(params.steering.kappa_dot_max, 0.0);
    assert_eq!(params.longitudinal.j_max, 0.0);
    assert_eq!(params.k_sf, 0.0);
}

#[test]
fn unknown_fixture_keys_are_ignored() {
    let params = VehicleId::VwVanagon
        .parameters(Some(fixture_param_root().as_path()))
        .unwrap();

    assert_eq!(params.w, 1.844);
    assert_eq!(params.h_cg, 0.723);
}

#[test]
fn semi_trailer_truck_has_trailer_group() {
    let params = parameters_vehicle4(Some(fixture_param_root().as_path())).unwrap();

    let expected = TrailerParameters {
        l: 13.6,
        w: 2.55,
        l_hitch: 12.0,
        l_total: 16.5,
        l_wb: 8.1,
    };
    assert_eq!(params.trailer, expected);
    assert_eq!(params.l, 5.1);
}

#[test]
fn structure_is_identical_across_vehicles() {
    let root = fixture_param_root();
    let keys = |params: &VehicleParameters| {
        let value = serde_yaml::to_value(params).unwrap();
        value
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(|key| key.as_str().map(str::to_owned))
            .collect::<Vec<_>>()
    };

    let reference = keys(&VehicleParameters::default());
    for vehicle in VehicleId::ALL {
        let params = vehicle.parameters(Some(root.as_path())).unwrap();
        assert_eq!(keys(&params), reference, "{vehicle}");
    }
}

#[test]
fn resolved_parameters_dump_under_document_keys() {
    let params = parameters_vehicle1(Some(fixture_param_root().as_path())).unwrap();

    let dumped = serde_yaml::to_string(&params).unwrap();

    assert!(dumped.contains("I_Phi_s: 244.047"));
    assert!(dumped.contains("K_sf: 21898.332"));
    assert!(dumped.contains("steering:"));
}

#[test]
fn copied_fixture_tree_resolves_from_relocated_root() {
    let source = fixture_param_root();
    let temp = tempfile::tempdir().unwrap();
    for dir in ["vehicle", "tire"] {
        fs::create_dir_all(temp.path().join(dir)).unwrap();
        for entry in fs::read_dir(source.join(dir)).unwrap() {
            let entry = entry.unwrap();
            fs::copy(entry.path(), temp.path().join(dir).join(entry.file_name())).unwrap();
        }
    }

    let from_copy = setup_vehicle_parameters(2, Some(temp.path())).unwrap();
    let from_fixture = setup_vehicle_parameters(2, Some(source.as_path())).unwrap();

    assert_eq!(from_copy, from_fixture);
}

#[test]
fn default_root_is_used_without_dir_params() {
    let resolver = ParameterResolver::with_default_root(fixture_param_root());

    let params = resolver.resolve(VehicleId::FordEscort.id(), None).unwrap();

    assert_eq!(params.m, 1225.887);
}

#[test]
fn missing_root_reports_vehicle_document() {
    let err = setup_vehicle_parameters(1, Some(std::path::Path::new("/no/such/velox/root")))
        .unwrap_err();

    match err {
        velox_params::Error::Fs(velox_fs::Error::DocumentNotFound { kind, path }) => {
            assert_eq!(kind, velox_fs::DocumentKind::Vehicle);
            assert!(path.ends_with("vehicle/parameters_vehicle1.yaml"));
        }
        other => panic!("expected DocumentNotFound, got {other:?}"),
    }
}
