use cluster_life::{Cell, LifeConfig, Pattern, World};

fn world_with(chunk: u32, stabilize_every: u64) -> World {
    World::new(LifeConfig {
        chunk_width: chunk,
        chunk_height: chunk,
        stabilize_every,
    })
    .expect("valid config")
}

fn set_alive(world: &mut World, cells: &[(i64, i64)]) {
    for &(x, y) in cells {
        world.write(x, y, Cell::Alive);
    }
}

fn live_cells(world: &World) -> Vec<(i64, i64)> {
    let mut cells: Vec<_> = world.clusters().flat_map(|c| c.live_cells()).collect();
    cells.sort_unstable();
    cells
}

const BLOCK: [(i64, i64); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

#[test]
fn fresh_world_is_empty() {
    let world: World = World::default();
    assert_eq!(world.cluster_count(), 0);
    assert_eq!(world.generation(), 0);
    for (x, y) in [(0, 0), (-40, 17), (1_000_000, -1_000_000)] {
        assert_eq!(world.read(x, y), Cell::Dead);
    }
    assert_eq!(world.cluster_count(), 0);
}

#[test]
fn write_then_read_round_trips() {
    let mut world: World = World::default();
    world.write(5, -9, Cell::Alive);
    assert_eq!(world.read(5, -9), Cell::Alive);
    world.write(5, -9, Cell::Dead);
    assert_eq!(world.read(5, -9), Cell::Dead);
    assert_eq!(world.cluster_count(), 1);
}

#[test]
fn first_write_allocates_one_aligned_cluster() {
    let mut world: World = World::default();
    assert!(world.cluster_at(-1, 130).is_none());

    world.write(-1, 130, Cell::Alive);
    let covering: Vec<_> = world.clusters().filter(|c| c.contains(-1, 130)).collect();
    assert_eq!(covering.len(), 1);
    assert_eq!(covering[0].origin(), (-64, 128));
    assert_eq!((covering[0].width(), covering[0].height()), (64, 64));

    world.write(-2, 131, Cell::Alive);
    assert_eq!(world.cluster_count(), 1);
}

#[test]
fn block_is_a_still_life() {
    let mut world: World = World::default();
    set_alive(&mut world, &BLOCK);
    world.advance();
    assert_eq!(live_cells(&world), BLOCK.to_vec());
    assert_eq!(world.generation(), 1);
}

#[test]
fn l_tromino_grows_into_block() {
    let mut world: World = World::default();
    set_alive(&mut world, &[(0, 0), (1, 0), (0, 1)]);
    assert_eq!(world.neighbor_count(1, 1), 3);

    world.advance();
    assert_eq!(live_cells(&world), BLOCK.to_vec());
}

#[test]
fn blinker_spreads_into_new_cluster() {
    let mut world = world_with(8, 1000);
    set_alive(&mut world, &[(7, 2), (7, 3), (7, 4)]);
    assert_eq!(world.cluster_count(), 1);
    assert!(world.cluster_at(8, 3).is_none());

    world.advance();
    assert_eq!(live_cells(&world), vec![(6, 3), (7, 3), (8, 3)]);
    assert_eq!(world.cluster_count(), 2);
    assert_eq!(world.cluster_at(8, 3).map(|c| c.origin()), Some((8, 0)));

    world.advance();
    assert_eq!(live_cells(&world), vec![(7, 2), (7, 3), (7, 4)]);
}

#[test]
fn blinker_straddling_negative_chunks() {
    let mut world = world_with(8, 1000);
    set_alive(&mut world, &[(-1, 0), (0, 0), (1, 0)]);
    assert_eq!(world.cluster_count(), 2);

    world.advance();
    assert_eq!(live_cells(&world), vec![(0, -1), (0, 0), (0, 1)]);
    assert!(world.cluster_at(0, -1).is_some());
}

#[test]
fn glider_travels_across_chunks() {
    let mut world = world_with(8, 5);
    let glider = Pattern::find("Glider").expect("glider pattern");
    glider.stamp(&mut world, 2, 2);

    for _ in 0..40 {
        world.advance();
    }

    assert_eq!(
        live_cells(&world),
        vec![(12, 14), (13, 12), (13, 14), (14, 13), (14, 14)]
    );
    // Chunks left behind are pruned at generation 40.
    let origins: Vec<_> = world.clusters().map(|c| c.origin()).collect();
    assert_eq!(origins, vec![(8, 8)]);
}

#[test]
fn still_chunk_pauses_and_live_write_resumes() {
    let mut world = world_with(16, 1);
    pause_block(&mut world);

    let cluster = world.cluster_at(0, 0).expect("block chunk");
    assert_eq!(cluster.cached_population(), 4);
    assert_eq!(cluster.population_delta(), 0.0);

    world.write(10, 10, Cell::Alive);
    assert!(!world.cluster_at(0, 0).expect("block chunk").is_paused());
}

fn pause_block(world: &mut World) {
    set_alive(world, &BLOCK);
    for _ in 0..64 {
        world.advance();
        if world.cluster_at(0, 0).is_some_and(|c| c.is_paused()) {
            return;
        }
    }
    panic!("block chunk never paused");
}

#[test]
fn paused_chunk_still_advances() {
    let mut world = world_with(16, 1000);
    set_alive(&mut world, &BLOCK);
    for _ in 0..64 {
        if world.cluster_at(0, 0).is_some_and(|c| c.is_paused()) {
            break;
        }
        world.stabilize();
    }

    // Neighbours live in another chunk; the paused one is untouched so far.
    set_alive(&mut world, &[(-1, 0), (-1, 1)]);
    assert!(world.cluster_at(0, 0).is_some_and(|c| c.is_paused()));

    world.advance();
    assert_eq!(world.read(0, 0), Cell::Dead);
    assert_eq!(world.read(0, 1), Cell::Dead);
    assert!(world.cluster_at(0, 0).is_some_and(|c| !c.is_paused()));
}

#[test]
fn paused_chunk_emptied_by_hand_is_pruned() {
    let mut world = world_with(16, 1);
    pause_block(&mut world);

    for &(x, y) in &BLOCK {
        world.write(x, y, Cell::Dead);
    }
    assert!(world.cluster_at(0, 0).is_some_and(|c| !c.is_paused()));

    world.advance();
    assert_eq!(world.population(), 0);
    assert_eq!(world.cluster_count(), 0);
}

#[test]
fn regrowth_in_paused_chunk() {
    let mut world = world_with(16, 1);
    pause_block(&mut world);

    world.write(1, 1, Cell::Dead);
    world.advance();
    assert_eq!(live_cells(&world), BLOCK.to_vec());
    assert_eq!(world.cluster_count(), 1);
}

#[test]
fn emptied_chunk_is_pruned() {
    let mut world = world_with(8, 2);
    set_alive(&mut world, &[(3, 3), (4, 3)]);
    set_alive(&mut world, &[(20, 20), (21, 20), (20, 21), (21, 21)]);
    assert_eq!(world.cluster_count(), 2);

    world.advance();
    assert_eq!(world.read(3, 3), Cell::Dead);
    assert_eq!(world.cluster_count(), 2);

    world.advance();
    let origins: Vec<_> = world.clusters().map(|c| c.origin()).collect();
    assert_eq!(origins, vec![(16, 16)]);
}

#[test]
fn reads_do_not_mutate() {
    let mut world = world_with(8, 1000);
    set_alive(&mut world, &[(7, 7), (8, 7), (7, 8)]);
    let clusters = world.cluster_count();

    let first = world.neighbor_count(8, 8);
    let second = world.neighbor_count(8, 8);
    assert_eq!(first, 3);
    assert_eq!(first, second);
    let _ = world.read(-100, -100);
    assert_eq!(world.cluster_count(), clusters);
    assert_eq!(world.population(), 3);
}

#[test]
fn invalid_config_is_rejected() {
    let err = World::new(LifeConfig {
        chunk_width: 0,
        ..LifeConfig::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("chunk_width"));
}
