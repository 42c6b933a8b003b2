use orbital_transfers::core::constants::G0_KM_S2;
use orbital_transfers::propulsion::{
    Stage, Vehicle, exhaust_speed_km_s, mass_consumed, propellant_for_burn, propellant_fraction,
};

fn stage(name: &str, dry: f64, wet: f64, isp: f64) -> Stage {
    Stage {
        name: name.to_string(),
        dry_mass_kg: dry,
        wet_mass_kg: wet,
        isp_seconds: isp,
    }
}

#[test]
fn reference_capture_mass_fraction() {
    let fraction = mass_consumed(5.748_790_656_471_036, -9.80665 / 1000.0, 250.0);
    assert!(
        (fraction - 0.904_138_804_591_234).abs() < 1e-9,
        "fraction = {fraction}"
    );
}

#[test]
fn negative_gravity_yields_positive_fraction() {
    let dv = 3.0;
    let conventional = mass_consumed(dv, -G0_KM_S2, 300.0);
    let flipped = mass_consumed(dv, G0_KM_S2, 300.0);
    assert!((0.0..1.0).contains(&conventional));
    assert!(flipped < 0.0, "positive g0 flips the sign: {flipped}");
    assert_eq!(propellant_fraction(dv, 300.0), conventional);
    assert_eq!(propellant_fraction(0.0, 300.0), 0.0);
}

#[test]
fn propellant_mass_scales_with_initial_mass() {
    let single = propellant_for_burn(1_000.0, 2.0, 320.0);
    let double = propellant_for_burn(2_000.0, 2.0, 320.0);
    assert!((double - 2.0 * single).abs() < 1e-9);
    // Rocket equation round trip: the burned mass delivers the requested dv.
    let dv = exhaust_speed_km_s(320.0) * (1_000.0 / (1_000.0 - single)).ln();
    assert!((dv - 2.0).abs() < 1e-9, "dv = {dv}");
}

#[test]
fn single_stage_delta_v_follows_rocket_equation() {
    let kick = stage("kick motor", 150.0, 1_400.0, 290.0);
    assert_eq!(kick.propellant_mass_kg(), 1_250.0);
    let dv = kick.ideal_delta_v_km_s(1_200.0);
    assert!((dv - 1.863_930_227_139_308).abs() < 1e-9, "dv = {dv}");
    assert!(kick.ideal_delta_v_km_s(0.0) > dv);
}

#[test]
fn staged_vehicle_carries_upper_stages_as_payload() {
    let vehicle = Vehicle {
        name: "Upper Stage".to_string(),
        payload_mass_kg: 1_200.0,
        stages: vec![
            stage("transfer stage", 900.0, 9_000.0, 320.0),
            stage("kick motor", 150.0, 1_400.0, 290.0),
        ],
    };
    assert_eq!(vehicle.initial_mass_kg(), 11_600.0);
    assert_eq!(vehicle.first_stage_isp(), Some(320.0));

    let budgets = vehicle.stage_delta_v_km_s();
    assert_eq!(budgets.len(), 2);
    assert!((budgets[0] - 3.760_237_177_730_583).abs() < 1e-9);
    assert!((budgets[1] - 1.863_930_227_139_308).abs() < 1e-9);
    assert!((vehicle.total_delta_v_km_s() - 5.624_167_404_869_891).abs() < 1e-9);
}

#[test]
fn empty_vehicle_has_no_capacity() {
    let vehicle = Vehicle {
        name: "payload only".to_string(),
        payload_mass_kg: 10.0,
        stages: Vec::new(),
    };
    assert_eq!(vehicle.total_delta_v_km_s(), 0.0);
    assert_eq!(vehicle.first_stage_isp(), None);
}
