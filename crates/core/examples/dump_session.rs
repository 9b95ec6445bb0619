use tapangle_core::{Point, Session, SessionOptions};

fn main() {
    let mut session = Session::new(SessionOptions::default()).unwrap();
    let taps = [
        Point::new(163.5, 88.25),
        Point::new(201.75, 340.0),
        Point::new(40.5, 260.0),
        Point::new(350.25, 231.5),
    ];

    println!("=== OPS ===");
    for tap in taps {
        for op in session.tap(tap) {
            println!("{}", serde_json::to_string(&op).unwrap());
        }
        let a = session.angles();
        println!("  -> {:?}: small={} large={}", session.phase(), a.small, a.large);
    }

    println!("\n=== SNAPSHOT ===");
    println!("{}", serde_json::to_string_pretty(&session.snapshot()).unwrap());

    std::fs::write("/tmp/tapangle_session.svg", session.svg()).unwrap();
    println!("\nwrote /tmp/tapangle_session.svg");
}
