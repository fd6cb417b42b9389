use assert_cmd::Command;

pub fn mtag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mtag").unwrap();
    cmd.env_remove("MTAG_ROOT");
    cmd
}
