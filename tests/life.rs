use std::collections::HashSet;

use conway_life::Life;

fn collect_live(life: &Life) -> HashSet<(i32, i32)> {
    life.grid().live_cells().collect()
}

fn seed(life: &mut Life, cells: &[(i32, i32)]) {
    for &(x, y) in cells {
        life.set_alive(x, y);
    }
}

#[test]
fn neighbor_counts_stay_in_range() {
    let mut life = Life::new(9, 7);
    for y in 0..7 {
        for x in 0..9 {
            if (x * 7 + y * 3) % 4 != 0 {
                life.set_alive(x, y);
            }
        }
    }
    for y in -2..9 {
        for x in -2..11 {
            assert!(life.count_neighbors(x, y) <= 8, "({x},{y})");
        }
    }

    let mut full = Life::new(3, 3);
    seed(&mut full, &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)]);
    assert_eq!(full.count_neighbors(1, 1), 8);
}

#[test]
fn dead_grid_stays_dead() {
    let mut life = Life::new(20, 15);
    for _ in 0..25 {
        life.step();
        assert_eq!(life.population(), 0);
    }
    assert_eq!(life.generation(), 25);
}

#[test]
fn out_of_bounds_writes_leave_grid_alone() {
    let mut life = Life::new(6, 4);
    seed(&mut life, &[(2, 1), (3, 2)]);
    let before = collect_live(&life);
    for (x, y) in [(-1, -1), (6, 0), (0, 4), (6, 4), (-100, 2), (2, 100)] {
        life.set_alive(x, y);
        assert!(!life.is_alive(x, y));
    }
    assert_eq!(collect_live(&life), before);
}

#[test]
fn clear_twice_is_clear_once() {
    let mut life = Life::new(8, 8);
    seed(&mut life, &[(1, 1), (2, 2), (7, 7)]);
    life.step();
    life.clear();
    let once = collect_live(&life);
    life.clear();
    assert_eq!(collect_live(&life), once);
    assert!(once.is_empty());
    assert_eq!(life.generation(), 0);
}

#[test]
fn step_reads_only_previous_generation() {
    // An in-place sweep would let the first column's births feed the next.
    let mut life = Life::new(5, 5);
    seed(&mut life, &[(1, 2), (2, 2), (3, 2)]);
    life.step();
    assert_eq!(collect_live(&life), HashSet::from([(2, 1), (2, 2), (2, 3)]));
}

#[test]
fn stale_back_buffer_does_not_leak() {
    let mut life = Life::new(6, 6);
    seed(&mut life, &[(0, 0), (5, 5)]);
    life.step();
    assert_eq!(life.population(), 0);
    // The back buffer now holds the old lone cells; they must not return.
    life.step();
    assert_eq!(life.population(), 0);
}

#[test]
fn edge_cells_see_no_wraparound() {
    // Would be a vertical blinker on a torus.
    let mut life = Life::new(5, 5);
    seed(&mut life, &[(2, 4), (2, 0), (2, 1)]);
    life.step();
    assert_eq!(life.population(), 0);
}
