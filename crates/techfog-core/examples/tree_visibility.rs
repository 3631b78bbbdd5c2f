//! Tree visibility example: spawn, research, refresh.
//!
//! Builds a small rocketry tree over the in-memory test implementations,
//! wires an EventBridge to a shared research store, and walks through the
//! spawn / research / despawn lifecycle, printing which nodes are visible
//! after each event.
//!
//! Run with: `cargo run -p techfog-core --example tree_visibility`

use std::cell::RefCell;
use std::rc::Rc;

use techfog_core::bridge::{EventBridge, ResearchOutcome, TreeScreenEvents};
use techfog_core::id::TechId;
use techfog_core::policy::PolicySetting;
use techfog_core::test_utils::{ResearchStore, ScreenNode, ScreenTree};

fn print_visibility(tree: &Rc<RefCell<ScreenTree>>, techs: &[&str]) {
    for tech in techs {
        let shown = tree.borrow().is_visible(tech);
        println!("  {tech:<20} {}", if shown { "shown" } else { "hidden" });
    }
    println!();
}

fn main() {
    let techs = [
        "start",
        "basic_rocketry",
        "general_rocketry",
        "stability",
        "advanced_rocketry",
    ];

    // start -> basic_rocketry -> {general_rocketry, stability}
    //   -> advanced_rocketry (needs both, but prefers any parent)
    let tree = Rc::new(RefCell::new(ScreenTree::new(vec![
        ScreenNode::new("start"),
        ScreenNode::new("basic_rocketry").parent("start"),
        ScreenNode::new("general_rocketry").parent("basic_rocketry"),
        ScreenNode::new("stability").parent("basic_rocketry"),
        ScreenNode::new("advanced_rocketry")
            .parent("general_rocketry")
            .parent("stability")
            .prefers_any(),
    ])));

    let store = Rc::new(RefCell::new(ResearchStore::new()));
    store.borrow_mut().unlock("start");

    let mut bridge = EventBridge::new(Rc::clone(&store), PolicySetting::Default);

    // --- Player opens the tech tree ---

    println!("=== Tree spawned (only the frontier is visible) ===\n");
    bridge.tree_spawned(&tree);
    print_visibility(&tree, &techs);

    // --- Research basic rocketry ---

    println!("=== basic_rocketry researched ===\n");
    store.borrow_mut().unlock("basic_rocketry");
    bridge.technology_researched(&TechId::new("basic_rocketry"), ResearchOutcome::Successful);
    print_visibility(&tree, &techs);

    // --- Research one of the two parents of advanced_rocketry ---

    println!("=== stability researched (advanced_rocketry prefers any parent) ===\n");
    store.borrow_mut().unlock("stability");
    bridge.technology_researched(&TechId::new("stability"), ResearchOutcome::Successful);
    print_visibility(&tree, &techs);

    // --- Close the screen; later research no longer touches the tree ---

    bridge.tree_despawned(&tree);
    store.borrow_mut().unlock("general_rocketry");
    bridge.technology_researched(&TechId::new("general_rocketry"), ResearchOutcome::Successful);
    println!("=== Tree despawned; research events are no-ops now ===\n");
    print_visibility(&tree, &techs);

    println!("Visibility demo complete.");
}
