//! Drives one full dough cycle headlessly and prints every machine event.

use noodle_core::{MachineEvent, NoodleMachine, Phase, Point};

fn report(events: Vec<MachineEvent>) {
    for e in events {
        match e {
            MachineEvent::PhaseChanged { from, to } => println!("   phase   {} → {}", from, to),
            MachineEvent::CutMade { x, cuts_made }  => println!("   cut     #{} at x = {:.1}", cuts_made, x),
            MachineEvent::DoughCompleted { completed } => println!("   done    noodles so far: {}", completed),
        }
    }
}

fn main() {
    println!("\n=== Noodle Machine Replay ===\n");
    let mut m = NoodleMachine::default();
    let a = m.anchors();
    println!("   canvas {}×{}, dough from y={} to y={}, exits at x={}\n",
        m.viewport().width, m.viewport().height, a.start_y, a.center_y, a.end_x);

    // ── 1. Pull ───────────────────────────────────────────────────────────
    println!("1. Pull down");
    m.pointer_down(Point::new(320.0, 100.0));
    let mut y = 100.0;
    while m.phase() == Phase::PullingDough {
        y += 25.0;
        report(m.pointer_move(Point::new(320.0, y)));
        m.frame();
    }
    m.pointer_up();
    println!("   dough y = {}\n", m.dough().y);

    // ── 2. Rotate ─────────────────────────────────────────────────────────
    println!("2. Circle around the centre");
    let c = m.viewport().center();
    let at = |deg: f64| {
        let r = deg.to_radians();
        Point::new(c.x + 150.0 * r.cos(), c.y + 150.0 * r.sin())
    };
    m.pointer_down(at(0.0));
    let mut deg = 0.0;
    while m.phase() == Phase::RotatingDough {
        deg += 10.0;
        report(m.pointer_move(at(deg)));
        m.frame();
    }
    m.pointer_up();
    println!("   scale = {:.2}, rotation = {:.2} rad\n", m.dough().scale, m.dough().rotation);

    // ── 3. Cut ────────────────────────────────────────────────────────────
    println!("3. Swipe along the guides");
    let xs: Vec<f64> = m.guide().lines().iter().map(|g| g.x).collect();
    for x in xs {
        let dy = m.dough().y;
        m.pointer_down(Point::new(x, dy - 40.0));
        report(m.pointer_move(Point::new(x, dy + 40.0)));
        m.pointer_up();
        m.frame();
    }
    println!("   progress: {}\n", m.progress_display().label);

    // ── 4. Move ───────────────────────────────────────────────────────────
    println!("4. Push right");
    m.pointer_down(Point::new(50.0, 800.0));
    let mut x = 50.0;
    while m.phase() == Phase::MovingToFinish {
        x += 10.0;
        report(m.pointer_move(Point::new(x, 800.0)));
        m.frame();
    }
    m.pointer_up();
    println!();

    match m.check_invariants() {
        Ok(())  => println!("   invariants hold; {} noodle(s) completed", m.completed()),
        Err(v)  => println!("   ⚠  {}", v),
    }
    println!();
}
