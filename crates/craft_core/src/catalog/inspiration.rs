use crate::models::{CraftIdea, CraftStep};

fn idea(title: &str, materials: &[&str], steps: &[(&str, &str)]) -> CraftIdea {
    CraftIdea {
        title: title.to_string(),
        materials: materials.iter().map(|m| m.to_string()).collect(),
        steps: steps
            .iter()
            .map(|(text, prompt)| CraftStep::new(*text, *prompt))
            .collect(),
    }
}

/// Lean example projects offered on the inspiration page.
pub fn inspiration_ideas() -> Vec<CraftIdea> {
    vec![
        idea(
            "Cozy Cardboard Playhouse",
            &[
                "Large cardboard box",
                "Construction paper (various colors)",
                "Glue (child-safe)",
                "Googly eyes",
                "Ribbons",
                "Child-safe scissors (with adult supervision)",
                "Stickers",
                "Markers",
                "Crayons",
                "Paint (tempera or acrylic, child-safe)",
                "Glitter",
                "Tape (masking or clear)",
            ],
            &[
                (
                    "First, ask a grown-up to help you open up your big cardboard box. Make sure it's a safe and cozy space inside!",
                    "A child and an adult happily setting up a large cardboard box in a living room.",
                ),
                (
                    "Decide where you want your doors and windows to be. You can draw them on the outside of the box with a marker.",
                    "A child drawing a square window and a rectangular door on the side of a cardboard box with a black marker.",
                ),
                (
                    "Have your grown-up carefully cut out the doors and windows you drew using scissors. Remember, only grown-ups should use sharp scissors!",
                    "An adult's hands carefully cutting out a window from a cardboard box with scissors.",
                ),
                (
                    "Now for the fun part - decorating! Use paint, markers, and crayons to color the outside of your playhouse. You can make it any color you like!",
                    "A colorful cardboard playhouse being painted by a child with bright colors like red, blue, and yellow.",
                ),
                (
                    "Cut out shapes from construction paper for bricks, flowers, or anything else you want. Glue them onto your playhouse. Add stickers and glitter for extra sparkle!",
                    "A child gluing colorful construction paper flowers onto their decorated cardboard playhouse.",
                ),
                (
                    "For a special touch, tape ribbons inside the windows to make pretend curtains. You can also glue googly eyes onto your playhouse to make it a friendly monster house or add fun characters.",
                    "Close-up of a cardboard box window with colorful ribbon curtains taped inside.",
                ),
                (
                    "Once the outside is done, decorate the inside of your playhouse too! You can draw pictures, add more stickers, or make it a cozy secret hideaway.",
                    "The inside of a cardboard playhouse decorated with crayon drawings of stars and smiling suns.",
                ),
                (
                    "Your Cozy Cardboard Playhouse is ready! Now you can play inside, read books, or invite your toys for a visit!",
                    "A happy child playing inside a fully decorated cardboard playhouse with their teddy bear.",
                ),
            ],
        ),
        idea(
            "Bottle Cap Bug Buddies",
            &[
                "Plastic bottle caps (various colors)",
                "Googly eyes",
                "Pipe cleaners",
                "Permanent markers",
                "Hot glue gun (with adult help)",
            ],
            &[
                (
                    "Clean your bottle caps. Pick out your favorite colors to make fun bug bodies.",
                    "A collection of clean, colorful plastic bottle caps arranged on a table.",
                ),
                (
                    "With adult help, use a hot glue gun to stick two googly eyes onto the top of a bottle cap.",
                    "An adult's hands gluing googly eyes onto a red plastic bottle cap.",
                ),
                (
                    "Cut a pipe cleaner into small pieces for legs and antennae. Bend them into shape.",
                    "A child's hands bending small pieces of black pipe cleaner to look like bug legs.",
                ),
                (
                    "Glue the pipe cleaner legs and antennae to the underside and top of the bottle cap.",
                    "A close-up of a bottle cap with pipe cleaner legs and antennae glued on, creating a little bug.",
                ),
                (
                    "Use permanent markers to draw a smile or spots on your bug buddy. Let it dry completely.",
                    "A child using a black permanent marker to draw a happy smile on a yellow bottle cap bug.",
                ),
            ],
        ),
        idea(
            "Toilet Paper Roll Rocket Ship",
            &[
                "Empty toilet paper roll",
                "Construction paper (red, blue, yellow)",
                "Scissors",
                "Glue",
                "Stickers (stars, planets)",
                "Aluminum foil",
            ],
            &[
                (
                    "Cover the toilet paper roll with blue construction paper. This will be the body of your rocket.",
                    "A child wrapping a blue piece of construction paper around an empty toilet paper roll.",
                ),
                (
                    "Cut a circle out of red paper. Cut a slit to the center and form it into a cone. Glue it on top of the roll as the rocket's nose.",
                    "A child gluing a red paper cone onto the top of the blue toilet paper roll.",
                ),
                (
                    "Cut out three small triangles from yellow paper to be the rocket's fins. Glue them evenly around the bottom of the roll.",
                    "Three yellow paper fins being glued to the bottom of a toilet paper roll rocket.",
                ),
                (
                    "Decorate your rocket ship with star and planet stickers. You can also draw a window with a marker.",
                    "A completed toilet paper roll rocket ship covered in shiny star stickers.",
                ),
                (
                    "For a fiery blast-off, cut strips of red, orange, and yellow tissue paper and stuff them into the bottom opening.",
                    "A child stuffing strips of colorful tissue paper into the bottom of their rocket to look like flames.",
                ),
            ],
        ),
    ]
}
