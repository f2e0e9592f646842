// End-to-end simulation laws: glider transport, oscillator periods, and
// the drive loop driving the grid.

use life_engine::{Cell, FrameScheduler, Grid, Session, lookup, lookup_name};

fn alive_cells(grid: &Grid) -> Vec<(u32, u32)> {
    let mut alive = Vec::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.cells_view()[(row * grid.width() + col) as usize] == Cell::Alive {
                alive.push((row, col));
            }
        }
    }
    alive
}

fn translated(cells: &[(u32, u32)], delta_row: i32, delta_col: i32, grid: &Grid) -> Vec<(u32, u32)> {
    let mut moved: Vec<_> = cells
        .iter()
        .map(|&(row, col)| {
            (
                (i64::from(row) + i64::from(delta_row)).rem_euclid(i64::from(grid.height())) as u32,
                (i64::from(col) + i64::from(delta_col)).rem_euclid(i64::from(grid.width())) as u32,
            )
        })
        .collect();
    moved.sort_unstable();
    moved
}

#[test]
fn glider_se_translates_one_cell_diagonally_per_period() {
    let mut grid = Grid::empty(64, 64).unwrap();
    grid.stamp(lookup_name("Glider SE").unwrap(), 5, 5).unwrap();
    let start = alive_cells(&grid);
    assert_eq!(start.len(), 5);

    for _ in 0..4 {
        grid.step();
    }

    assert_eq!(alive_cells(&grid), translated(&start, 1, 1, &grid));
}

#[test]
fn each_glider_rotation_travels_in_its_named_direction() {
    let headings = [
        ("Glider NW", -1, -1),
        ("Glider SW", 1, -1),
        ("Glider NE", -1, 1),
        ("Glider SE", 1, 1),
    ];
    for (name, delta_row, delta_col) in headings {
        let mut grid = Grid::empty(64, 64).unwrap();
        grid.stamp(lookup_name(name).unwrap(), 20, 20).unwrap();
        let start = alive_cells(&grid);

        for _ in 0..4 {
            grid.step();
        }

        assert_eq!(
            alive_cells(&grid),
            translated(&start, delta_row, delta_col, &grid),
            "{name} drifted off course"
        );
    }
}

#[test]
fn glider_crosses_the_seam_and_comes_home() {
    // On a 16x16 torus the SE glider returns to its exact starting cells
    // after 16 periods, having wrapped both edges once.
    let mut grid = Grid::empty(16, 16).unwrap();
    grid.stamp(lookup_name("Glider SE").unwrap(), 14, 14).unwrap();
    let start = alive_cells(&grid);

    for _ in 0..16 * 4 {
        grid.step();
    }

    assert_eq!(alive_cells(&grid), start);
}

#[test]
fn pulsar_has_period_three() {
    let mut grid = Grid::empty(32, 32).unwrap();
    grid.stamp(lookup_name("Pulsar").unwrap(), 15, 15).unwrap();
    let start = alive_cells(&grid);

    grid.step();
    assert_ne!(alive_cells(&grid), start);
    grid.step();
    grid.step();
    assert_eq!(alive_cells(&grid), start);
}

#[test]
fn blinker_has_period_two() {
    let mut grid = Grid::empty(16, 16).unwrap();
    grid.stamp(lookup_name("Blinker").unwrap(), 8, 8).unwrap();
    let start = alive_cells(&grid);

    grid.step();
    assert_ne!(alive_cells(&grid), start);
    grid.step();
    assert_eq!(alive_cells(&grid), start);
}

struct NullScheduler;

impl FrameScheduler for NullScheduler {
    type Handle = ();

    fn schedule(&mut self) {}
    fn cancel(&mut self, _handle: ()) {}
}

#[test]
fn drive_loop_transports_a_stamped_glider() {
    let grid = Grid::empty(64, 64).unwrap();
    let mut session = Session::new(grid, NullScheduler);

    // Glider SE is catalog index 3.
    session.stamp(3, 5, 5).unwrap();
    let start = alive_cells(session.grid());

    let mut reference = Grid::empty(64, 64).unwrap();
    reference.stamp(lookup(3).unwrap(), 5, 5).unwrap();
    assert_eq!(start, alive_cells(&reference));

    session.play();
    for _ in 0..4 {
        assert!(session.tick());
    }
    session.pause();
    assert!(!session.tick(), "tick after pause must not step");

    assert_eq!(session.generation(), 4);
    assert_eq!(
        alive_cells(session.grid()),
        translated(&start, 1, 1, session.grid())
    );
}
