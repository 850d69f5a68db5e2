use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Material {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialCategory {
    pub category: &'static str,
    pub items: Vec<Material>,
}

fn category(name: &'static str, items: &[(&'static str, &'static str)]) -> MaterialCategory {
    MaterialCategory {
        category: name,
        items: items
            .iter()
            .map(|&(name, description)| Material { name, description })
            .collect(),
    }
}

/// The materials guide: common craft supplies grouped by purpose.
pub fn common_materials() -> Vec<MaterialCategory> {
    vec![
        category(
            "Essentials: Adhesives & Cutting",
            &[
                ("Child-Safe Scissors", "A must-have for cutting paper, string, and other soft materials. Always use with supervision."),
                ("White Glue / PVA Glue", "Perfect for paper, cardboard, and fabric. Dries clear and is non-toxic."),
                ("Glue Sticks", "Less messy than liquid glue, great for younger kids and simple paper crafts."),
                ("Tape (Clear & Masking)", "For quick fixes and construction. Masking tape is paintable!"),
            ],
        ),
        category(
            "Surfaces & Structures",
            &[
                ("Construction Paper", "Comes in a rainbow of colors. The foundation for countless projects."),
                ("Cardboard", "Recycle cereal boxes, shipping boxes, and paper towel tubes for building."),
                ("Paper Plates", "Can be turned into masks, animals, UFOs, and more."),
                ("Craft Sticks (Popsicle Sticks)", "Excellent for building structures, making puppets, and spreading glue."),
            ],
        ),
        category(
            "Color & Decoration",
            &[
                ("Crayons", "Easy for little hands to grip and perfect for coloring large areas."),
                ("Washable Markers", "For bright, bold lines and details. The washable kind saves clothes!"),
                ("Washable Paint (Tempera)", "Great for painting, stamping, and finger painting. Cleans up easily with water."),
                ("Paintbrushes", "A variety of sizes allows for different effects, from broad strokes to fine details."),
                ("Stickers", "An easy and fun way to add personality and detail to any project."),
                ("Glitter", "For when your project needs a little extra sparkle and magic. Can be messy!"),
            ],
        ),
        category(
            "Crafty Extras & Embellishments",
            &[
                ("Googly Eyes", "Instantly bring any character or creature to life. They come in all sizes!"),
                ("Pipe Cleaners (Chenille Stems)", "Bendable, fuzzy sticks for making sculptures, limbs, or decorations."),
                ("Yarn or String", "Useful for hanging projects, creating spiderwebs, or making hair for puppets."),
                ("Cotton Balls", "Perfect for clouds, sheep's wool, snow, or soft textures."),
                ("Ribbons & Fabric Scraps", "Add texture, color, and flair to creations."),
            ],
        ),
    ]
}
