use assert_cmd::Command;

pub fn moodcal_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodcal").unwrap();
    cmd.env_remove("MOODCAL_CONFIG");
    cmd.env_remove("NO_COLOR");
    cmd.env_remove("RUST_LOG");
    cmd
}
