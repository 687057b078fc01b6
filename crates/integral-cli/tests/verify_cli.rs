use std::process::Command;

#[test]
fn verify_small_grid_runs_every_check() {
    let out = Command::new(env!("CARGO_BIN_EXE_integral"))
        .args(["verify", "--width", "32", "--height", "24", "--max-threads", "5"])
        .output()
        .expect("run integral verify");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(out.status.success(), "verify failed:\n{}", stderr);
    assert!(stderr.contains("naive_oracle    = ok"), "stderr:\n{}", stderr);
    assert!(stderr.contains("rect_queries    = ok (100 checked)"), "stderr:\n{}", stderr);
    assert!(stderr.contains("verify ok"), "stderr:\n{}", stderr);
}

#[test]
fn verify_skips_naive_on_large_grid() {
    let out = Command::new(env!("CARGO_BIN_EXE_integral"))
        .args([
            "verify",
            "--width",
            "100",
            "--height",
            "80",
            "--max-threads",
            "2",
            "--rects",
            "10",
        ])
        .output()
        .expect("run integral verify");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(out.status.success(), "verify failed:\n{}", stderr);
    assert!(stderr.contains("naive_oracle    = skipped"), "stderr:\n{}", stderr);
}
