use aoc2024::{solutions, Args, Parser};

fn main() {
    solutions().run(&Args::parse());
}
