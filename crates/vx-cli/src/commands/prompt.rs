use vx_adventure::WorldName;

pub fn run(agent: &str) -> Result<(), String> {
    let prompt = match agent.trim().to_lowercase().as_str() {
        "jarvis" | "shop" => vx_shop::prompt::JARVIS_PROMPT,
        other => WorldName::parse(other)
            .map(vx_adventure::prompt::persona)
            .ok_or_else(|| format!("unknown agent '{agent}' (expected jarvis, aetherwyn or gita)"))?,
    };
    println!("{prompt}");
    Ok(())
}
