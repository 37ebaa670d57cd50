use qrom_rs::anf::Anf;
use qrom_rs::circuit::GateList;
use qrom_rs::search::optimize_flips;
use qrom_rs::synth::{synthesize, Flips};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    // f = NOT (x0 OR x1), given by its satisfying patterns
    let n = 2;
    let patterns = vec![0b00];
    println!("patterns = {:?}", patterns);

    let poly = Anf::reduce(patterns.iter().copied(), n);
    println!("poly = {}", poly);
    println!("cost = {}", poly.cost());

    let best = optimize_flips(&patterns, n);
    println!("best mask = {:#b}", best.mask);
    println!("best cost = {}", best.cost);

    let mut gates = GateList::new();
    let run = synthesize(&patterns, n, Flips::Best, &mut gates);
    println!("synthesized {} gates with {} controls:", gates.len(), run.cost);
    for gate in gates.gates() {
        println!("  {}", gate);
    }

    for x in 0..(1u64 << n) {
        println!("f({:02b}) = {}", x, gates.evaluate(x, n) as u8);
    }

    Ok(())
}
