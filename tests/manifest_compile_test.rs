use stack_sdl::{ManifestResources, Sdl};

const SINGLE_SERVICE: &str = r#"
version: "2.0"
services:
  web:
    image: nginx:1.27
profiles:
  compute:
    small:
      resources:
        cpu:
          units: 100m
        memory:
          size: 512Mi
        storage:
          - size: 2G
  placement:
    westcoast:
      pricing:
        web:
          denom: uakt
          amount: "1000"
deployment:
  web:
    westcoast:
      profile: small
      count: 3
"#;

#[test]
fn test_round_trip_single_deployment() {
    let sdl = Sdl::from_str(SINGLE_SERVICE).unwrap();
    assert!(sdl.validate().valid);

    let groups = sdl.manifest().unwrap();
    assert_eq!(groups.len(), 1);

    let group = &groups[0];
    assert_eq!(group.name, "web");
    assert_eq!(group.count, 3);
    assert_eq!(group.price.denom, "uakt");
    assert_eq!(group.price.amount, "1000");
    assert_eq!(
        group.resources,
        ManifestResources {
            cpu_units: 100,
            memory_bytes: 512 * 1024 * 1024,
            storage_bytes: vec![2 * 1024_u64.pow(3)],
        }
    );
}

#[test]
fn test_compile_twice_yields_equal_manifests() {
    let sdl = Sdl::from_str(SINGLE_SERVICE).unwrap();
    assert_eq!(sdl.manifest().unwrap(), sdl.manifest().unwrap());
}

#[test]
fn test_one_group_per_deployment_entry() {
    let sdl = Sdl::from_str(
        r#"
version: "2.0"
services:
  web:
    image: nginx
  worker:
    image: busybox
profiles:
  compute:
    small:
      resources:
        cpu:
          units: "0.5"
        memory:
          size: 256Mi
  placement:
    west:
      pricing:
        web:
          denom: uakt
          amount: "10"
        worker:
          denom: uakt
          amount: "20"
    east:
      pricing:
        web:
          denom: uakt
          amount: "15"
deployment:
  web:
    west:
      profile: small
      count: 1
    east:
      profile: small
      count: 2
  worker:
    west:
      profile: small
      count: 4
"#,
    )
    .unwrap();

    assert!(sdl.validate().valid);
    let groups = sdl.manifest().unwrap();

    assert_eq!(groups.len(), 3);
    let names: Vec<(&str, u32)> = groups
        .iter()
        .map(|g| (g.name.as_str(), g.count))
        .collect();
    assert_eq!(names, [("web", 1), ("web", 2), ("worker", 4)]);
    assert_eq!(groups[1].price.amount, "15");
}

#[test]
fn test_missing_profile_aborts_whole_compilation() {
    let sdl = Sdl::from_str(&SINGLE_SERVICE.replace("profile: small", "profile: missing-profile"))
        .unwrap();

    let err = sdl.manifest().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation error: Missing service or compute profile for web"
    );
}

#[test]
fn test_deployment_for_undeclared_service_uses_deployment_key() {
    let sdl = Sdl::from_str(&SINGLE_SERVICE.replace("deployment:\n  web:", "deployment:\n  ghost:"))
        .unwrap();

    let err = sdl.manifest().unwrap_err();
    assert!(err
        .to_string()
        .contains("Missing service or compute profile for ghost"));
}

#[test]
fn test_no_partial_manifest_on_failure() {
    // Second entry is broken; nothing is returned for the first either.
    let sdl = Sdl::from_str(
        r#"
version: "2.0"
services:
  web:
    image: nginx
profiles:
  compute:
    small:
      resources:
        cpu:
          units: "1"
        memory:
          size: 128Mi
  placement:
    west:
      pricing:
        web:
          denom: uakt
          amount: "10"
    east:
      pricing: {}
deployment:
  web:
    west:
      profile: small
      count: 1
    east:
      profile: small
      count: 1
"#,
    )
    .unwrap();

    let err = sdl.manifest().unwrap_err();
    assert!(err
        .to_string()
        .contains("Missing pricing for service web in placement east"));
}
