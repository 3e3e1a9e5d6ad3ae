use assert_cmd::Command;

pub fn tagseed_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagseed").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
