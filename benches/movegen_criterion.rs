use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use quoridor_core::game_state::board_types::{Board, Direction, Player, Point, WallOrientation};
use quoridor_core::move_generation::legal_move_generator::LegalMoveGenerator;
use quoridor_core::move_generation::perft::perft;
use quoridor_core::moves::move_description::Move;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    board: fn() -> Board,
    expected_nodes: &'static [u64],
}

fn start_board() -> Board {
    Board::new()
}

fn midgame_board() -> Board {
    let mut board = Board::new();
    let line = [
        Move::step(Player::One, Direction::Down),
        Move::step(Player::Two, Direction::Up),
        Move::place_wall(Player::One, WallOrientation::Horizontal, Point::new(3, 5)),
        Move::place_wall(Player::Two, WallOrientation::Vertical, Point::new(4, 1)),
        Move::step(Player::One, Direction::Left),
        Move::place_wall(Player::Two, WallOrientation::Horizontal, Point::new(1, 2)),
        Move::place_wall(Player::One, WallOrientation::Vertical, Point::new(6, 6)),
        Move::step(Player::Two, Direction::Right),
    ];
    for mv in line {
        board
            .try_apply_move(mv)
            .expect("benchmark line should be legal");
    }
    board
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "start",
        board: start_board,
        expected_nodes: &[131, 16_681],
    },
    BenchCase {
        name: "midgame",
        board: midgame_board,
        expected_nodes: &[],
    },
];

fn bench_available_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("available_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let board = (case.board)();
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| black_box(board.available_moves(black_box(Player::One))).len());
        });
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let generator = LegalMoveGenerator::geometric();
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let board = (case.board)();

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&generator, &board, Player::One, depth);
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let board = black_box(&board);
                        let count = perft(&generator, board, Player::One, black_box(depth));
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(movegen_benches, bench_available_moves, bench_perft);
criterion_main!(movegen_benches);
