use std::process::Command;

fn query(strategy: &str, rect: [&str; 4]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_integral"))
        .args([
            "query",
            "--width",
            "30",
            "--height",
            "20",
            "--seed",
            "9",
            "--threads",
            "3",
            "--strategy",
            strategy,
            "--x0",
            rect[0],
            "--y0",
            rect[1],
            "--x1",
            rect[2],
            "--y1",
            rect[3],
        ])
        .output()
        .expect("run integral query")
}

fn stdout_u64(out: &std::process::Output) -> u64 {
    assert!(
        out.status.success(),
        "query failed: status={:?}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).trim().parse().expect("u64 on stdout")
}

#[test]
fn both_strategies_answer_the_same() {
    let a = stdout_u64(&query("threads", ["3", "4", "17", "12"]));
    let b = stdout_u64(&query("rayon", ["3", "4", "17", "12"]));
    assert_eq!(a, b);
}

#[test]
fn split_rectangles_add_up() {
    let whole = stdout_u64(&query("threads", ["0", "0", "29", "19"]));
    let left = stdout_u64(&query("threads", ["0", "0", "14", "19"]));
    let right = stdout_u64(&query("threads", ["15", "0", "29", "19"]));
    assert_eq!(whole, left + right);
}

#[test]
fn out_of_bounds_rectangle_fails() {
    let out = query("threads", ["0", "0", "30", "0"]);
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
}
