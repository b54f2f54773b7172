//! The inner realm: a journey across the battlefield of the mind, guided by
//! the teachings of the Bhagavad Gita.

use crate::scene::{Choice, Effect, Scene};
use crate::world::World;

/// Build the Gita inner-realm adventure.
pub fn gita() -> World {
    World::new("The Inner Realm")
        .with_restart_line("Breathe in. The conch sounds again, and the field within awaits you.")
        .with_scene(
            Scene::new(
                "intro",
                "The Field Within",
                "You stand on a vast field that exists only inside your own mind. Two armies \
                 of thoughts face each other in the dawn haze. Beside you, a chariot waits, \
                 and its charioteer watches you with calm, knowing eyes. At the edge of the \
                 field, a quiet grove sways in a wind you cannot feel.",
            )
            .with_choice(Choice::new(
                "mount_chariot",
                "Mount the chariot beside the calm charioteer",
                "chariot",
            ))
            .with_choice(Choice::new(
                "walk_field",
                "Walk alone between the armies",
                "field_of_doubt",
            ))
            .with_choice(Choice::new(
                "enter_grove",
                "Enter the quiet grove at the edge of the field",
                "grove_of_stillness",
            )),
        )
        .with_scene(
            Scene::new(
                "chariot",
                "The Chariot of the Mind",
                "Five white horses strain at their harness, each pulling its own way. The \
                 charioteer smiles: the horses are your senses, the reins are your mind, and \
                 you are the one who must hold them.",
            )
            .with_choice(
                Choice::new(
                    "hold_reins",
                    "Hold the reins steady and calm the horses",
                    "chariot",
                )
                .with_effect(Effect::journal(
                    "The senses are horses; a steady mind holds the reins.",
                )),
            )
            .with_choice(Choice::new(
                "ask_charioteer",
                "Ask the charioteer for guidance",
                "counsel",
            ))
            .with_choice(Choice::new(
                "drive_forward",
                "Drive forward into the middle of the field",
                "field_of_doubt",
            )),
        )
        .with_scene(
            Scene::new(
                "field_of_doubt",
                "The Field of Doubt",
                "Between the armies you see familiar faces: teachers, friends, your own \
                 past selves. Your bow grows heavy. A voice inside asks why any of this must \
                 be done at all.",
            )
            .with_choice(Choice::new(
                "lower_bow",
                "Lower your bow and sink to the ground",
                "despair",
            ))
            .with_choice(
                Choice::new(
                    "raise_bow",
                    "Raise your bow despite the trembling",
                    "river_of_duty",
                )
                .with_effect(Effect::item("bow of resolve")),
            )
            .with_choice(Choice::new(
                "seek_counsel",
                "Seek counsel from the charioteer",
                "counsel",
            )),
        )
        .with_scene(
            Scene::new(
                "despair",
                "The Valley of Despair",
                "The field falls away and you sit in a grey valley. Nothing seems worth \
                 doing. Yet somewhere far above, a conch shell sounds once.",
            )
            .with_choice(
                Choice::new(
                    "let_tears_fall",
                    "Let the tears fall and feel the grief fully",
                    "despair",
                )
                .with_effect(Effect::journal("Grief, felt fully, began to soften.")),
            )
            .with_choice(Choice::new(
                "call_for_guidance",
                "Call out for guidance",
                "counsel",
            ))
            .with_choice(Choice::new(
                "rise_again",
                "Rise and return to the field",
                "field_of_doubt",
            )),
        )
        .with_scene(
            Scene::new(
                "counsel",
                "Counsel of the Charioteer",
                "The charioteer sits with you, unhurried. He offers to teach you of duty, of \
                 acting without clinging, or to show you what he truly is.",
            )
            .with_choice(
                Choice::new(
                    "learn_duty",
                    "Learn about duty and right action",
                    "river_of_duty",
                )
                .with_effect(Effect::journal(
                    "Better your own duty done imperfectly than another's done well.",
                )),
            )
            .with_choice(
                Choice::new(
                    "learn_detachment",
                    "Learn about acting without attachment",
                    "grove_of_stillness",
                )
                .with_effect(Effect::journal(
                    "You have a right to your actions, never to their fruits.",
                )),
            )
            .with_choice(Choice::new(
                "see_true_form",
                "Ask to see his true form",
                "universal_form",
            )),
        )
        .with_scene(
            Scene::new(
                "river_of_duty",
                "The River of Duty",
                "A wide river runs across the field. Lotus leaves float on its surface, wet \
                 yet untouched by the water. On the far bank, the dawn is breaking.",
            )
            .with_choice(Choice::new(
                "cross_river",
                "Cross the river toward the dawn",
                "dawn_of_action",
            ))
            .with_choice(
                Choice::new(
                    "gather_lotus",
                    "Gather a lotus leaf from the water",
                    "river_of_duty",
                )
                .with_effect(Effect::item("lotus leaf"))
                .with_effect(Effect::journal(
                    "Like the lotus, act in the world without being soaked by it.",
                )),
            )
            .with_choice(Choice::new(
                "return_to_field",
                "Return to the field of doubt",
                "field_of_doubt",
            )),
        )
        .with_scene(
            Scene::new(
                "grove_of_stillness",
                "The Grove of Stillness",
                "Inside the grove the noise of the armies fades. A small lamp burns without \
                 flickering on a flat stone, sheltered from every wind.",
            )
            .with_choice(
                Choice::new(
                    "meditate",
                    "Sit beside the lamp and meditate",
                    "grove_of_stillness",
                )
                .with_effect(Effect::journal(
                    "A steady mind is like a lamp in a windless place.",
                )),
            )
            .with_choice(
                Choice::new(
                    "carry_lamp",
                    "Carry the unflickering lamp with you",
                    "intro",
                )
                .with_effect(Effect::item("windless lamp")),
            )
            .with_choice(Choice::new(
                "walk_back",
                "Walk back out to the field",
                "field_of_doubt",
            )),
        )
        .with_scene(
            Scene::new(
                "universal_form",
                "The Universal Form",
                "The charioteer grows until he fills the sky. Suns rise and set in his eyes, \
                 worlds are born and dissolve in his breath. It is too much and exactly \
                 enough.",
            )
            .with_choice(
                Choice::new(
                    "surrender",
                    "Surrender your fear to the vision",
                    "dawn_of_action",
                )
                .with_effect(Effect::journal("Fear dissolved in the vision of the whole.")),
            )
            .with_choice(Choice::new(
                "close_eyes",
                "Close your eyes and ask for his gentle form",
                "counsel",
            )),
        )
        .with_scene(
            Scene::new(
                "dawn_of_action",
                "Dawn of Right Action",
                "The sun is fully up. The armies wait for you. Your hands are steady now, and \
                 the choice no longer feels like a weight.",
            )
            .with_choice(
                Choice::new(
                    "act_without_fear",
                    "Step forward and act without fear",
                    "ending",
                )
                .with_effect(Effect::item("conch of courage"))
                .with_effect(Effect::journal("You acted, and let the outcome go.")),
            )
            .with_choice(Choice::new(
                "pause_once_more",
                "Pause once more in the grove",
                "grove_of_stillness",
            )),
        )
        .with_scene(
            Scene::new(
                "ending",
                "Return to the Self",
                "The field, the armies and the charioteer fold gently back into your own \
                 breath. What you learned walks with you into the waking world.",
            )
            .with_choice(Choice::new(
                "begin_again",
                "Begin the inner journey again",
                "intro",
            ))
            .with_choice(Choice::new(
                "rest_in_silence",
                "Rest a while in silence",
                "ending",
            )),
        )
}
