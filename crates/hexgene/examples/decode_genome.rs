//! Decodes one genome hex string against catalog files and prints it.
//!
//! Usage: decode_genome [HEX] [256|512] [TRAITS_JSON] [PARTS_JSON]

use hexgene::{Layout, PartCatalog, TraitCatalog, decode_genome, quality_score};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let hex = args.next().unwrap_or_else(|| {
        "0x11c642400a028ca14a428c20cc011080c61180a0820180604233082".to_string()
    });
    let layout = match args.next().as_deref() {
        Some("512") | Some("extended") => Layout::Extended,
        _ => Layout::Legacy,
    };
    let traits_path = args.next().unwrap_or_else(|| "tests/fixtures/traits.json".to_string());
    let parts_path = args.next().unwrap_or_else(|| "tests/fixtures/parts.json".to_string());

    let traits = TraitCatalog::from_path(&traits_path).expect("failed to load trait catalog");
    let parts = PartCatalog::from_path(&parts_path).expect("failed to load part catalog");

    let genome = decode_genome(&hex, layout, &traits, &parts).expect("failed to decode genome");

    println!("=== Genome ({} bits) ===", layout.total_bits());
    println!("class:     {}", genome.class);
    println!("region:    {}", genome.region);
    println!("tag:       {:?}", genome.tag);
    println!("body skin: {:?}", genome.body_skin);
    println!(
        "pattern:   d={} r1={} r2={}",
        genome.pattern.d, genome.pattern.r1, genome.pattern.r2
    );
    println!(
        "color:     d=#{} r1=#{} r2=#{}",
        genome.color.d, genome.color.r1, genome.color.r2
    );

    println!("\n=== Parts ===");
    for (part_type, record) in genome.parts() {
        println!(
            "{:<5}  d: {:<22} r1: {:<22} r2: {:<22}{}",
            part_type.to_string(),
            record.dominant.part_id,
            record.recessive1.part_id,
            record.recessive2.part_id,
            if record.mystic { "  [mystic]" } else { "" },
        );
    }

    println!("\nquality: {:.2}", quality_score(&genome));
}
