//! The ruins of Aetherwyn: a storm-worn temple on a broken plateau.

use crate::scene::{Choice, Effect, Scene};
use crate::world::World;

/// Build the Aetherwyn ruins adventure.
pub fn aetherwyn() -> World {
    World::new("The Ruins of Aetherwyn")
        .with_restart_line(
            "The storm clears, the years fold back, and you stand once more before the ruins.",
        )
        .with_scene(
            Scene::new(
                "intro",
                "The Ruins of Aetherwyn",
                "Wind howls across a broken plateau. Ahead, a crumbling temple leans against \
                 the grey sky, its archway cracked but open. A fallen statue lies half buried \
                 in rubble, and faint blue lights drift toward the cliffs to the east.",
            )
            .with_choice(
                Choice::new(
                    "enter_temple",
                    "Enter the crumbling temple through the cracked archway",
                    "inner_hall",
                )
                .with_effect(Effect::journal("Stepped beneath the archway of Aetherwyn.")),
            )
            .with_choice(Choice::new(
                "search_rubble",
                "Search the rubble around the fallen statue",
                "fallen_statue",
            ))
            .with_choice(Choice::new(
                "follow_lights",
                "Follow the drifting blue lights toward the cliffs",
                "cliff_path",
            )),
        )
        .with_scene(
            Scene::new(
                "fallen_statue",
                "The Fallen Statue",
                "The statue once showed a robed keeper holding a lantern. Beneath its \
                 outstretched hand, something glints between the stones, and an inscription \
                 runs along the base.",
            )
            .with_choice(
                Choice::new(
                    "take_key",
                    "Pry the glinting bronze key from the stones",
                    "fallen_statue",
                )
                .with_effect(Effect::item("tarnished bronze key"))
                .with_effect(Effect::journal("Found a bronze key beneath the keeper's hand.")),
            )
            .with_choice(
                Choice::new(
                    "read_inscription",
                    "Read the inscription on the base",
                    "fallen_statue",
                )
                .with_effect(Effect::journal(
                    "Inscription: only the keeper's light opens what lies below.",
                )),
            )
            .with_choice(Choice::new(
                "return_to_plaza",
                "Return to the windy plaza",
                "intro",
            )),
        )
        .with_scene(
            Scene::new(
                "cliff_path",
                "The Cliff Path",
                "A narrow path clings to the cliff face. The blue lights gather around a \
                 small shrine carved into the rock, while a rope ladder drops into a dark \
                 opening far below.",
            )
            .with_choice(Choice::new(
                "approach_shrine",
                "Approach the shrine where the lights gather",
                "wisp_shrine",
            ))
            .with_choice(Choice::new(
                "climb_ladder",
                "Climb down the rope ladder into the darkness",
                "sunken_archive",
            ))
            .with_choice(Choice::new(
                "head_back",
                "Head back toward the temple plaza",
                "intro",
            )),
        )
        .with_scene(
            Scene::new(
                "wisp_shrine",
                "Shrine of the Wisps",
                "The lights are wisps, tiny and curious. They circle your head, humming a \
                 tune older than the temple. One of them hovers close, as if offering itself.",
            )
            .with_choice(
                Choice::new(
                    "accept_wisp",
                    "Cup your hands and accept the offered wisp",
                    "cliff_path",
                )
                .with_effect(Effect::item("captured wisp-light"))
                .with_effect(Effect::journal("A wisp chose to travel with you.")),
            )
            .with_choice(
                Choice::new(
                    "ask_wisps",
                    "Ask the wisps about the temple",
                    "wisp_shrine",
                )
                .with_effect(Effect::journal(
                    "The wisps sang of a sealed vault beneath the inner hall.",
                )),
            )
            .with_choice(Choice::new(
                "leave_shrine",
                "Leave the shrine and return to the path",
                "cliff_path",
            )),
        )
        .with_scene(
            Scene::new(
                "inner_hall",
                "The Inner Hall",
                "Pillars rise into darkness. Faded murals cover the walls, a stone altar \
                 crackles with faint static at the far end, and a stairway spirals down \
                 into the earth.",
            )
            .with_choice(Choice::new(
                "approach_altar",
                "Approach the crackling altar",
                "altar_room",
            ))
            .with_choice(
                Choice::new(
                    "study_murals",
                    "Study the faded murals on the walls",
                    "inner_hall",
                )
                .with_effect(Effect::journal(
                    "The murals show keepers calming a storm with a crystal of light.",
                )),
            )
            .with_choice(Choice::new(
                "descend_stairs",
                "Descend the spiral stairway",
                "sunken_archive",
            ))
            .with_choice(Choice::new(
                "exit_temple",
                "Exit the temple into the wind",
                "intro",
            )),
        )
        .with_scene(
            Scene::new(
                "sunken_archive",
                "The Sunken Archive",
                "Water pools between shelves of swollen books. A single tome rests dry on a \
                 lectern, and beyond it a round bronze door is sealed with a keyhole shaped \
                 like a lantern.",
            )
            .with_choice(
                Choice::new(
                    "read_tome",
                    "Read the dry tome on the lectern",
                    "sunken_archive",
                )
                .with_effect(Effect::item("water-stained tome"))
                .with_effect(Effect::journal(
                    "The tome names the Heart of Aetherwyn, a crystal that holds the storm.",
                )),
            )
            .with_choice(Choice::new(
                "open_bronze_door",
                "Open the sealed bronze door",
                "heart_chamber",
            ))
            .with_choice(Choice::new(
                "climb_stairs",
                "Climb the stairs back to the hall",
                "inner_hall",
            )),
        )
        .with_scene(
            Scene::new(
                "altar_room",
                "The Altar of Storms",
                "Up close the altar hums. Lightning threads through cracks in its surface, \
                 waiting for a hand to complete the circuit.",
            )
            .with_choice(
                Choice::new(
                    "touch_altar",
                    "Touch the altar and let the storm through",
                    "ending",
                )
                .with_effect(Effect::journal("You let the storm of Aetherwyn pass through you.")),
            )
            .with_choice(
                Choice::new(
                    "pray_silently",
                    "Kneel and pray silently",
                    "altar_room",
                )
                .with_effect(Effect::journal("The static eased while you prayed.")),
            )
            .with_choice(Choice::new(
                "step_away",
                "Step away from the altar",
                "inner_hall",
            )),
        )
        .with_scene(
            Scene::new(
                "heart_chamber",
                "The Heart of Aetherwyn",
                "The door grinds open. In a round chamber, a crystal the size of a fist spins \
                 in midair, flickering with a trapped storm.",
            )
            .with_choice(
                Choice::new(
                    "claim_crystal",
                    "Claim the spinning crystal",
                    "ending",
                )
                .with_effect(Effect::item("storm crystal"))
                .with_effect(Effect::journal("You claimed the Heart of Aetherwyn.")),
            )
            .with_choice(
                Choice::new(
                    "shatter_crystal",
                    "Shatter the crystal and free the storm",
                    "ending",
                )
                .with_effect(Effect::journal("You freed the storm, and the ruins fell silent.")),
            )
            .with_choice(Choice::new(
                "retreat",
                "Retreat to the archive",
                "sunken_archive",
            )),
        )
        .with_scene(
            Scene::new(
                "ending",
                "Epilogue",
                "The wind dies. Whatever you carried out of Aetherwyn, the plateau is calm \
                 for the first time in a thousand years. Your tale here is complete.",
            )
            .with_choice(Choice::new(
                "begin_again",
                "Begin a new journey at the ruins",
                "intro",
            ))
            .with_choice(Choice::new(
                "linger",
                "Linger and watch the calm sky",
                "ending",
            )),
        )
}
