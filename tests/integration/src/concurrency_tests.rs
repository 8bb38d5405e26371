//! Resolutions share nothing, so parallel calls need no coordination.

use std::sync::Arc;
use std::thread;
use velox_params::{ParameterResolver, VehicleId};
use velox_test_utils::fixtures::fixture_param_root;

#[test]
fn parallel_resolutions_of_different_vehicles() {
    let root = Arc::new(fixture_param_root());
    let resolver = Arc::new(ParameterResolver::new());

    let handles: Vec<_> = VehicleId::ALL
        .into_iter()
        .map(|vehicle| {
            let root = Arc::clone(&root);
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                let params = resolver.resolve(vehicle.id(), Some(root.as_path())).unwrap();
                (vehicle, params)
            })
        })
        .collect();

    for handle in handles {
        let (vehicle, params) = handle.join().unwrap();
        let sequential = vehicle.parameters(Some(root.as_path())).unwrap();
        assert_eq!(params, sequential, "{vehicle}");
    }
}

#[test]
fn parallel_resolutions_of_same_vehicle_agree() {
    let root = fixture_param_root();

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| VehicleId::SemiTrailerTruck.parameters(Some(root.as_path()))))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect()
    });

    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(results[0].trailer.l, 13.6);
}
