use super::*;

#[test]
fn it_has_a_valid_command_definition() {
    build().debug_assert();
}

#[test]
fn it_rejects_unknown_spinners() {
    let res = build().try_get_matches_from(vec!["sitecheck", "--spinner", "clock"]);
    assert!(res.is_err());
}

#[test]
fn it_parses_the_config_subcommand() {
    let matches = build()
        .try_get_matches_from(vec!["sitecheck", "config", "path"])
        .unwrap();

    let (name, sub) = matches.subcommand().unwrap();
    assert_eq!(name, "config");
    assert_eq!(sub.subcommand_name(), Some("path"));
}
