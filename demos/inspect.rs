fn main() {
    let args: Vec<String> = std::env::args().collect();
    let text = if args.len() > 1 {
        std::fs::read_to_string(&args[1]).expect("Failed to read file")
    } else {
        "## Role\nYou are a release assistant.\n\n✅ Check the changelog\n🚀 Tag the release\n\n[Walkthrough](https://youtu.be/dQw4w9WgXcQ?t=5)\n*Two minute tour*".to_string()
    };

    for block in instructfmt::parse(&text) {
        println!("{:#?}", block);
    }

    // Load config from current directory
    let config = instructfmt::Config::load(std::path::Path::new("instructfmt.toml"))
        .expect("Failed to load instructfmt.toml");
    println!("{}", instructfmt::to_html_with_config(&text, &config));
}
