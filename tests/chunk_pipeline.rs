use voxel_terrain::config::{ChunkConfig, CollisionConvention};
use voxel_terrain::rendering::meshing::visibility::{is_visible, visible_mask};
use voxel_terrain::voxels::block::block_type::BlockType;
use voxel_terrain::voxels::chunk::Chunk;

fn config(seed: u64) -> ChunkConfig {
    ChunkConfig {
        seed: Some(seed),
        ..ChunkConfig::default()
    }
}

#[test]
fn regeneration_is_deterministic_per_seed() {
    let mut a = Chunk::new(config(2024)).unwrap();
    let mut b = Chunk::new(config(2024)).unwrap();
    for _ in 0..3 {
        a.regenerate();
        b.regenerate();
        assert_eq!(a.grid().as_bytes(), b.grid().as_bytes());
        let (ba, bb) = (a.buffers(), b.buffers());
        assert_eq!(ba.position_bytes(), bb.position_bytes());
        assert_eq!(ba.color_bytes(), bb.color_bytes());
        assert_eq!(ba.tex_coord_bytes(), bb.tex_coord_bytes());
    }
}

#[test]
fn successive_passes_differ() {
    let mut chunk = Chunk::new(config(7)).unwrap();
    chunk.regenerate();
    let first = chunk.grid().as_bytes().to_vec();
    chunk.regenerate();
    assert_ne!(first, chunk.grid().as_bytes());
}

#[test]
fn buffer_lengths_follow_visible_cells() {
    let mut chunk = Chunk::new(config(11)).unwrap();
    chunk.regenerate();
    let buffers = chunk.buffers();
    let visible = visible_mask(chunk.grid()).count_ones();

    assert!(visible > 0);
    assert_eq!(buffers.visible_cells, visible);
    assert_eq!(chunk.vertex_count(), visible * 24);
    assert_eq!(buffers.position_floats().len(), visible * 24 * 3);
    assert_eq!(buffers.color_floats().len(), visible * 24 * 3);
    assert_eq!(buffers.tex_coord_floats().len(), visible * 24 * 2);
}

#[test]
fn emitted_cells_touch_air_or_the_grid_edge() {
    let mut chunk = Chunk::new(config(13)).unwrap();
    chunk.regenerate();
    let grid = chunk.grid();
    for x in 0..grid.size_x() {
        for y in 0..grid.max_height() {
            for z in 0..grid.size_z() {
                if !is_visible(grid, x, y, z) {
                    continue;
                }
                let on_edge = x == 0
                    || y == 0
                    || z == 0
                    || x + 1 == grid.size_x()
                    || y + 1 == grid.max_height()
                    || z + 1 == grid.size_z();
                let open = [
                    (x + 1, y, z),
                    (x.wrapping_sub(1), y, z),
                    (x, y + 1, z),
                    (x, y.wrapping_sub(1), z),
                    (x, y, z + 1),
                    (x, y, z.wrapping_sub(1)),
                ]
                .into_iter()
                .any(|(nx, ny, nz)| grid.in_bounds(nx, ny, nz) && !grid.is_occupied(nx, ny, nz));
                assert!(on_edge || open, "({x}, {y}, {z}) is enclosed but emitted");
            }
        }
    }
}

#[test]
fn columns_keep_height_ordering() {
    let mut chunk = Chunk::new(config(17)).unwrap();
    chunk.regenerate();
    let heights = chunk.heights().unwrap();
    let max_height = chunk.config().max_height;
    let grid = chunk.grid();
    for (x, z, surface, deep) in heights.columns() {
        assert!(1 <= deep && deep <= surface && surface <= max_height);
        // lakes repaint cells but never hollow one out or raise terrain
        for y in 0..surface {
            assert!(grid.is_occupied(x, y, z), "hole at ({x}, {y}, {z})");
        }
        for y in surface..max_height {
            let block_type = grid.get(x, y, z).unwrap();
            assert!(
                matches!(block_type, BlockType::AIR | BlockType::WATER | BlockType::SAND),
                "{block_type:?} above the surface at ({x}, {y}, {z})"
            );
        }
    }
}

#[test]
fn probe_hits_a_solid_cell_centre() {
    let mut chunk = Chunk::new(config(19)).unwrap();
    chunk.regenerate();
    let cfg = chunk.config().clone();
    let (cell, _) = chunk.grid().solid_cells().next().unwrap();
    let centre =
        |axis: usize, index: usize| cfg.origin[axis] as f32 + index as f32 * cfg.cell_length;

    assert!(chunk.too_close(centre(0, cell.x), centre(1, cell.y), centre(2, cell.z)));
    assert!(!chunk.too_close(10_000.0, 10_000.0, 10_000.0));
}

#[test]
fn camera_convention_negates_queries() {
    let mut chunk = Chunk::new(ChunkConfig {
        collision_convention: CollisionConvention::CameraTranslation,
        ..config(23)
    })
    .unwrap();
    chunk.regenerate();
    let cfg = chunk.config().clone();
    // level 0 is solid in every column
    let centre = [
        cfg.origin[0] as f32 + 4.0 * cfg.cell_length,
        cfg.origin[1] as f32,
        cfg.origin[2] as f32 + 4.0 * cfg.cell_length,
    ];
    assert!(chunk.too_close(-centre[0], -centre[1], -centre[2]));
}

#[test]
fn buffers_publish_across_threads() {
    let mut chunk = Chunk::new(config(29)).unwrap();
    let handle = chunk.buffer_handle();
    chunk.regenerate();
    let expected = chunk.vertex_count();

    let seen = std::thread::spawn(move || handle.snapshot().vertex_count())
        .join()
        .unwrap();
    assert_eq!(seen, expected);
}

#[test]
fn config_file_round_trips_through_json() {
    let text = r#"{ "size_x": 12, "size_z": 10, "max_height": 16, "min_height_bound": 4, "seed": 5,
                    "lakes": { "max_attempts": 3 } }"#;
    let mut chunk = Chunk::new(ChunkConfig::from_json_str(text).unwrap()).unwrap();
    chunk.regenerate();
    assert_eq!(chunk.grid().len(), 12 * 16 * 10);
    assert!(chunk.lake_report().attempts <= 3);
}
