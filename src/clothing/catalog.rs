//! Static clothing reference tables
//!
//! Base outfits are keyed by sky condition and age group. Every cell lists
//! one item per category in a fixed order. Accessory tables hold the
//! weather-themed extras and the basic age-appropriate pool that is sampled.

use crate::models::{AgeGroup, ClothingCategory, Condition};

/// Template an item is instantiated from for one response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTemplate {
    pub category: ClothingCategory,
    pub item: &'static str,
    pub description: &'static str,
    pub reason: &'static str,
}

const fn tmpl(
    category: ClothingCategory,
    item: &'static str,
    description: &'static str,
    reason: &'static str,
) -> ItemTemplate {
    ItemTemplate {
        category,
        item,
        description,
        reason,
    }
}

/// Accessory template; category is implied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessoryTemplate {
    pub item: &'static str,
    pub description: &'static str,
    pub reason: &'static str,
}

const fn acc(item: &'static str, description: &'static str, reason: &'static str) -> AccessoryTemplate {
    AccessoryTemplate {
        item,
        description,
        reason,
    }
}

impl AccessoryTemplate {
    #[must_use]
    pub fn as_item(&self) -> ItemTemplate {
        tmpl(
            ClothingCategory::Accessories,
            self.item,
            self.description,
            self.reason,
        )
    }
}

use ClothingCategory::{Accessories, Bottoms, Protection, Shoes, Tops};

const SUNNY_TODDLER: &[ItemTemplate] = &[
    tmpl(Tops, "UV-cut short-sleeve T-shirt", "Thin cotton that stays comfortable when sweaty, with a UV-cut finish that shields the skin.", "Protects a toddler's sensitive skin from UV rays."),
    tmpl(Bottoms, "Thin half pants", "Stretchy and easy to move in, quick for diaper changes. Knee-length keeps legs cool.", "Active movement and easy diaper changes."),
    tmpl(Shoes, "Velcro sandals", "Velcro straps make them easy to put on, well ventilated, with a non-slip sole.", "Children can put them on alone and stay safe."),
    tmpl(Protection, "Wide-brimmed hat", "Chin strap keeps it on in the wind and the brim covers the back of the neck. UV-blocking fabric; add sunscreen too.", "Prevents losing the hat and gives broad UV protection."),
    tmpl(Accessories, "Straw water bottle", "A spill-resistant straw makes drinking easy.", "Easy to use for small hands."),
];

const SUNNY_PRESCHOOL: &[ItemTemplate] = &[
    tmpl(Tops, "Short-sleeve polo shirt", "The collar looks neat and it stays comfortable when sweaty. Easy to put on alone.", "Builds independence while keeping tidy."),
    tmpl(Bottoms, "Shorts", "Easy to move in, with a pocket for a handkerchief.", "Active play and looking after their own things."),
    tmpl(Shoes, "Velcro sneakers", "Fit snugly for running about and fasten with velcro without help.", "Supports motor skills and independence."),
    tmpl(Protection, "Cap", "Adjustable size in a fun design. Use together with UV sunscreen.", "Balances style and sun protection."),
    tmpl(Accessories, "Neck-strap water bottle", "Lightweight and hangs from the neck, so it is hard to lose.", "Keeps hydration going during active play."),
];

const SUNNY_SCHOOL: &[ItemTemplate] = &[
    tmpl(Tops, "Short-sleeve shirt", "Matches school uniforms, no ironing needed. Versions with sweat pads work well.", "Suits school life and is easy to care for."),
    tmpl(Bottoms, "Chino pants", "Neat looking yet easy to move in, machine washable when dirty.", "Respects school rules while staying practical."),
    tmpl(Shoes, "White sneakers", "A colour that fits school rules, good for sports, comfortable to wear.", "Follows school rules and keeps sport safe."),
    tmpl(Protection, "Foldable sun hat", "Folds small enough for a school bag. For PE and outdoor play, with UV protection.", "Easy to carry and used only when needed."),
    tmpl(Accessories, "Water bottle with towel", "Shoulder strap for easy carrying and a towel for wiping sweat.", "Convenient and hygienic at school."),
];

const CLOUDY_TODDLER: &[ItemTemplate] = &[
    tmpl(Tops, "Thin long-sleeve T-shirt", "Helps regulate body heat and protects the skin. Front opening makes dressing easy.", "Copes with temperature changes and is easy to dress."),
    tmpl(Bottoms, "Thin leggings", "Easy to move in and protect the knees. Diaper changes stay simple.", "Active movement and fewer scrapes."),
    tmpl(Shoes, "Lightweight sneakers", "Soft and easy to walk in. Velcro so children can manage alone.", "Stable walking and independence."),
    tmpl(Accessories, "Thin cardigan", "Put on or taken off as the temperature changes. Big buttons are easy to handle.", "Teaches regulating body temperature."),
    tmpl(Protection, "Light hat", "Stays on in the wind and protects the head. A cute design children enjoy wearing.", "Head protection and a habit of wearing hats."),
];

const CLOUDY_PRESCHOOL: &[ItemTemplate] = &[
    tmpl(Tops, "Long-sleeve cut-and-sew top", "Pleasant on the skin and easy to put on alone. Ideal for layering.", "Combines independence and comfort."),
    tmpl(Bottoms, "Stretch pants", "Easy to move in and keep their shape through sitting and running.", "Handles all kinds of activity."),
    tmpl(Shoes, "Athletic shoes", "Cushioned to support growing feet, with a non-slip sole.", "Healthy foot development and safety."),
    tmpl(Accessories, "Zip-up hoodie", "The zip makes adjusting warmth simple and the hood keeps the neck warm.", "Learning to adjust their own temperature."),
    tmpl(Protection, "Reversible hat", "Can be flipped to match mood or outfit. The chin strap keeps it safe.", "Style and practicality."),
];

const CLOUDY_SCHOOL: &[ItemTemplate] = &[
    tmpl(Tops, "Long-sleeve shirt", "Fits under a uniform, easy to adjust for temperature and looks neat.", "Temperature control suited to school life."),
    tmpl(Bottoms, "Uniform-friendly pants", "Meet school rules while staying easy to move in. Simple to care for.", "Follows the rules and stays practical."),
    tmpl(Shoes, "School-approved shoes", "Follow school rules with the function needed for sports.", "Follows school rules and keeps sport safe."),
    tmpl(Accessories, "School cardigan", "A layering piece accepted as part of the uniform.", "Temperature control within school rules."),
    tmpl(Protection, "Red-and-white school cap", "The school-issued cap for PE and outdoor activities.", "Required for school activities."),
];

const RAINY_TODDLER: &[ItemTemplate] = &[
    tmpl(Tops, "Waterproof smock", "Fabric that copes with getting wet and comes off easily. Bright colours are easy to see.", "Keeps children visible and safe in the rain."),
    tmpl(Bottoms, "Waterproof over-pants", "Worn over normal clothes and fastened with velcro.", "Rain protection that is easy to put on."),
    tmpl(Shoes, "Short rain boots", "An easy-walking height with a non-slip sole and a cute design.", "Safety and easy walking."),
    tmpl(Accessories, "Kids' umbrella", "Light and easy to hold with a safe resin tip. Bright colours stand out.", "Safety and visibility."),
    tmpl(Protection, "Waterproof change-of-clothes set", "Spare clothes packed in a waterproof bag for when they get wet.", "Stays comfortable and hygienic."),
];

const RAINY_PRESCHOOL: &[ItemTemplate] = &[
    tmpl(Tops, "Raincoat", "Children can practise putting it on alone. Reflectors add safety.", "Builds independence and safety."),
    tmpl(Bottoms, "Rain pants", "Elastic ankles stop rain getting in. Designed for free movement.", "Fully waterproof and easy to move in."),
    tmpl(Shoes, "Rubber boots", "Firm non-slip soles and ankle-high cover. Easy to pull on.", "Safe walking on rainy days."),
    tmpl(Accessories, "Kids' rain umbrella", "Opens and closes easily, resists wind, and has space for a name.", "Easy to use and hard to lose."),
    tmpl(Protection, "Towel", "A soft towel to carry for drying off straight away.", "Hygiene and comfort."),
];

const RAINY_SCHOOL: &[ItemTemplate] = &[
    tmpl(Tops, "Uniform raincoat", "Worn over the uniform, meets school rules and packs away compactly.", "Follows school rules and stays practical."),
    tmpl(Bottoms, "Uniform rain pants", "Keep the uniform dry and allow free movement. Essential for the school commute.", "Protects the uniform and keeps children safe."),
    tmpl(Shoes, "School rain boots", "A colour allowed by school rules with a grippy sole. Easy to swap at school.", "Follows school rules and keeps the commute safe."),
    tmpl(Accessories, "Folding umbrella", "Fits in a school bag, sturdy and long-lasting, with reflectors.", "Portable and safe."),
    tmpl(Protection, "Waterproof drawstring bag", "Keeps wet things apart from PE clothes and spares.", "Hygiene and tidiness."),
];

const SNOWY_TODDLER: &[ItemTemplate] = &[
    tmpl(Tops, "Thick sweatshirt", "Very warm and easy to put on. Layer to adjust.", "Warmth and easy dressing."),
    tmpl(Bottoms, "Fleece-lined pants", "Warm and easy to move in. Diaper changes stay smooth.", "Warmth and easy care."),
    tmpl(Shoes, "Waterproof boots", "Insulated and repel snow and water, with non-slip soles.", "Warm feet and safe footing."),
    tmpl(Accessories, "Mittens", "No separate fingers so hands stay warm. A connecting cord prevents losing them.", "Warmth and loss prevention."),
    tmpl(Protection, "Hat with ear flaps", "A warm hat that covers the ears. The chin strap keeps it on in the wind.", "Keeps the head and ears warm."),
];

const SNOWY_PRESCHOOL: &[ItemTemplate] = &[
    tmpl(Tops, "Fleece jacket", "Light and warm, the zip adjusts warmth easily. Simple to wash.", "Lightness and warmth together."),
    tmpl(Bottoms, "Snow pants", "Made for snow play, waterproof and insulated with reinforced knees.", "Protection and warmth during snow play."),
    tmpl(Shoes, "Snow boots", "Firm grip, easy to put on and very warm.", "Safe and warm on snowy paths."),
    tmpl(Accessories, "Five-finger gloves", "Nimble fingers and warmth, covering the wrist.", "Dexterity and warmth."),
    tmpl(Protection, "Neck warmer", "Keeps the neck warm and is safer than a scarf. Stretchy and easy to put on.", "Neck warmth and safety."),
];

const SNOWY_SCHOOL: &[ItemTemplate] = &[
    tmpl(Tops, "Uniform sweater", "The sweater the school specifies or recommends. Warm wool blend.", "Follows school rules and keeps warm."),
    tmpl(Bottoms, "Uniform thermal pants", "Thin but warm inner pants worn under the uniform.", "Keeps warm without changing the look."),
    tmpl(Shoes, "Winter school shoes", "A colour allowed by school rules with grip and insulation.", "Follows school rules and keeps the winter commute safe."),
    tmpl(Accessories, "Uniform gloves", "Gloves in a colour and design the school permits. Practical first.", "Keeps warm within school rules."),
    tmpl(Protection, "Scarf", "Plain or school colours, keeps the neck properly warm.", "Follows school rules and keeps out the cold."),
];

/// Base outfit for a condition and age group
#[must_use]
pub fn base_items(condition: Condition, age_group: AgeGroup) -> &'static [ItemTemplate] {
    match (condition, age_group) {
        (Condition::Sunny, AgeGroup::Toddler) => SUNNY_TODDLER,
        (Condition::Sunny, AgeGroup::Preschool) => SUNNY_PRESCHOOL,
        (Condition::Sunny, AgeGroup::School) => SUNNY_SCHOOL,
        (Condition::Cloudy, AgeGroup::Toddler) => CLOUDY_TODDLER,
        (Condition::Cloudy, AgeGroup::Preschool) => CLOUDY_PRESCHOOL,
        (Condition::Cloudy, AgeGroup::School) => CLOUDY_SCHOOL,
        (Condition::Rainy, AgeGroup::Toddler) => RAINY_TODDLER,
        (Condition::Rainy, AgeGroup::Preschool) => RAINY_PRESCHOOL,
        (Condition::Rainy, AgeGroup::School) => RAINY_SCHOOL,
        (Condition::Snowy, AgeGroup::Toddler) => SNOWY_TODDLER,
        (Condition::Snowy, AgeGroup::Preschool) => SNOWY_PRESCHOOL,
        (Condition::Snowy, AgeGroup::School) => SNOWY_SCHOOL,
    }
}

const SUNNY_TODDLER_EXTRAS: &[AccessoryTemplate] = &[
    acc("UV-cut sunglasses", "Safe children's sunglasses that shield the eyes from UV, with a strap so they don't fall.", "Protects the eyes from strong sunlight."),
    acc("Cooling towel", "Cool-touch fabric that chills when wet. Wrap it around the neck.", "Helps regulate body heat on hot days."),
    acc("Bug-repellent wristband", "Natural repellent that is gentle on skin and lasts for hours.", "Prevents insect bites during outdoor play."),
    acc("Swim armbands", "Inflatable armbands for the pool or the beach.", "Safety during water play."),
    acc("Stroller parasol", "A small parasol for the stroller that blocks 99% of UV.", "Prevents sunburn while on the move."),
];

const SUNNY_PRESCHOOL_EXTRAS: &[AccessoryTemplate] = &[
    acc("Explorer kit", "Magnifier, compass and small bag for nature watching.", "Encourages learning outdoors."),
    acc("Swim goggles", "Children's goggles with clear vision for the pool or sea.", "Fun and safe water play."),
    acc("Fruit-print bandana", "A cute bandana for wiping sweat or wearing around the neck.", "Practical and stylish."),
    acc("Shell collecting bag", "A small mesh bag for treasures found at the beach or river.", "Curiosity about nature and the joy of collecting."),
    acc("Sunscreen stick", "A stick children can apply themselves. Easy to carry.", "Frequent sun protection."),
];

const SUNNY_SCHOOL_EXTRAS: &[AccessoryTemplate] = &[
    acc("Sports towel", "Highly absorbent and quick drying, sized for sports and clubs.", "Needed for exercise at school."),
    acc("Cooling spray", "Instantly cools a flushed body. Safe ingredients.", "Cools down after exercise."),
    acc("UV-cut arm covers", "Prevent arm sunburn on the way to school. Easy on and off.", "Protection during long walks outdoors."),
    acc("Insulated lunch bag", "Keeps lunch and drinks cold. Compact size.", "Food safety on hot days."),
    acc("Sweat wipes", "Stay clean when out. Gentle enough for sensitive skin.", "Cleanliness and comfort."),
];

const CLOUDY_TODDLER_EXTRAS: &[AccessoryTemplate] = &[
    acc("Pinwheel", "A cute pinwheel that spins in the breeze and makes walks more fun.", "Makes outdoor play on grey days fun."),
    acc("Rainbow pendant", "A safe pendant that shimmers in rainbow colours at different angles.", "Brightens the mood under a grey sky."),
    acc("Thermometer key ring", "A small thermometer to read the air temperature.", "Builds awareness of temperature changes."),
    acc("Cloud sticker book", "A sticker book for recording the shape of today's clouds.", "Interest in weather and observation."),
    acc("Fluffy mascot", "A small mascot as soft as a cloud.", "A comforting cloud-themed companion."),
];

const CLOUDY_PRESCHOOL_EXTRAS: &[AccessoryTemplate] = &[
    acc("Weather notebook", "Record the weather every day and learn cloud types.", "Scientific thinking and persistence."),
    acc("Wind vane", "A simple tool that shows which way the wind blows.", "Understanding natural phenomena."),
    acc("Toy camera", "Pretend to photograph clouds and sky like a reporter.", "Observation and a habit of recording."),
    acc("Pressure-change gadget", "A small device that shows air pressure changes by colour.", "Learning to predict weather changes."),
    acc("Cloud-print scarf", "A light scarf with a cloud pattern.", "Fashion that matches the weather."),
];

const CLOUDY_SCHOOL_EXTRAS: &[AccessoryTemplate] = &[
    acc("Weather station kit", "A mini set with hygrometer and wind vane, good for school projects.", "Interest in science and learning support."),
    acc("Multi-function compass", "Compass, thermometer and magnifier in one.", "Practical for outdoor activities."),
    acc("Weather forecast cards", "Learning cards for predicting weather from cloud shapes.", "Observation and prediction skills."),
    acc("Folding seat cushion", "Handy for sitting outdoors, with a waterproof finish.", "Comfort during outdoor activities."),
    acc("Damp-proof notebook case", "Protects notebooks and textbooks from moisture.", "Protects school supplies."),
];

const RAINY_TODDLER_EXTRAS: &[AccessoryTemplate] = &[
    acc("Rainbow umbrella charm", "A cute charm for the umbrella that makes rainy days exciting.", "Brightens the mood on rainy days."),
    acc("Raindrop magnifier", "A children's loupe for looking at raindrops up close.", "Curiosity about rain and science."),
    acc("Waterproof toy pouch", "A clear toy pouch that can get wet.", "Bring toys safely on rainy days."),
    acc("Rain rhythm instrument", "A small instrument to play along with the sound of rain.", "Musical play on rainy days."),
    acc("Reflective bracelet", "A bracelet made of reflective material.", "Visibility on rainy days."),
];

const RAINY_PRESCHOOL_EXTRAS: &[AccessoryTemplate] = &[
    acc("Raindrop collector", "A clear container for studying the size and shape of raindrops.", "Scientific interest in rain."),
    acc("Rain boot stickers", "Waterproof stickers to decorate rain boots.", "Turns rain gear into something fun."),
    acc("Rainy day diary", "A diary with a waterproof cover just for rainy days.", "Memories and writing practice."),
    acc("Puddle ruler", "A marked stick for measuring puddle depth.", "Measurement and understanding rainfall."),
    acc("Umbrella ring toss", "A game of landing umbrellas on a target while sheltering from rain.", "Makes waiting out the rain fun."),
];

const RAINY_SCHOOL_EXTRAS: &[AccessoryTemplate] = &[
    acc("Rain gauge", "A proper gauge that measures actual rainfall.", "Hands-on science with real numbers."),
    acc("Waterproof phone case", "Use a phone safely even in the rain.", "Practical for everyday life."),
    acc("Rainy day study set", "Workbook and materials about how rain forms.", "Scientific understanding of the weather."),
    acc("Wet-item bag", "A deodorising waterproof bag for wet clothes and shoes.", "Hygiene and tidiness."),
    acc("Rain sound recorder", "A small device to record and replay the sound of rain.", "Sensitivity to sound and interest in recording."),
];

const SNOWY_TODDLER_EXTRAS: &[AccessoryTemplate] = &[
    acc("Snowball maker", "Makes neat snowballs without cold hands.", "More fun in the snow."),
    acc("Snowflake viewer", "A simple viewer that magnifies snow crystals.", "The beauty of nature and interest in science."),
    acc("Waterproof mittens", "Waterproof mittens for snow play, with a cord so they don't get lost.", "Protects hands during snow play."),
    acc("Snowman kit", "Decoration parts for building a snowman.", "Creativity and richer snow play."),
    acc("Footprint stamp", "A stamp for leaving cute footprints in the snow.", "Snow day memories."),
];

const SNOWY_PRESCHOOL_EXTRAS: &[AccessoryTemplate] = &[
    acc("Snow science kit", "Experiment tools for learning about melting points and crystals.", "Learning science through snow."),
    acc("Sled safety belt", "A belt that keeps children secure on a sled.", "Safer snow play."),
    acc("Snow sculpting tools", "A safe tool set for carving snow sculptures.", "Artistic and creative development."),
    acc("Snowball fight shield", "A light shield for snowball fights.", "Safe, active snow play."),
    acc("Winter animal cards", "Cards showing the tracks of animals seen in the snow.", "Nature watching and interest in animals."),
];

const SNOWY_SCHOOL_EXTRAS: &[AccessoryTemplate] = &[
    acc("Snow quality meter", "A real instrument that measures snow density and temperature.", "Deeper scientific observation."),
    acc("Ice rink kit", "Tools for making a skating rink from snow and ice.", "Interest in winter sports."),
    acc("Snow cave guide", "A guidebook on building a safe snow cave.", "Survival skills and safety knowledge."),
    acc("Winter constellation viewer", "A viewer for the constellations of the clear winter night.", "Interest in astronomy and the seasons."),
    acc("Snowshoes", "Snowshoes for walking on deep snow.", "Activities in winter mountains."),
];

/// Weather-themed accessories for a condition and age group
#[must_use]
pub fn themed_accessories(condition: Condition, age_group: AgeGroup) -> &'static [AccessoryTemplate] {
    match (condition, age_group) {
        (Condition::Sunny, AgeGroup::Toddler) => SUNNY_TODDLER_EXTRAS,
        (Condition::Sunny, AgeGroup::Preschool) => SUNNY_PRESCHOOL_EXTRAS,
        (Condition::Sunny, AgeGroup::School) => SUNNY_SCHOOL_EXTRAS,
        (Condition::Cloudy, AgeGroup::Toddler) => CLOUDY_TODDLER_EXTRAS,
        (Condition::Cloudy, AgeGroup::Preschool) => CLOUDY_PRESCHOOL_EXTRAS,
        (Condition::Cloudy, AgeGroup::School) => CLOUDY_SCHOOL_EXTRAS,
        (Condition::Rainy, AgeGroup::Toddler) => RAINY_TODDLER_EXTRAS,
        (Condition::Rainy, AgeGroup::Preschool) => RAINY_PRESCHOOL_EXTRAS,
        (Condition::Rainy, AgeGroup::School) => RAINY_SCHOOL_EXTRAS,
        (Condition::Snowy, AgeGroup::Toddler) => SNOWY_TODDLER_EXTRAS,
        (Condition::Snowy, AgeGroup::Preschool) => SNOWY_PRESCHOOL_EXTRAS,
        (Condition::Snowy, AgeGroup::School) => SNOWY_SCHOOL_EXTRAS,
    }
}

const TODDLER_BASICS: &[AccessoryTemplate] = &[
    acc("Name wristband", "A wristband with name and contact details in case the child gets lost.", "Safety and identification."),
    acc("Favourite plush toy", "Small enough to carry, a comfort when feeling anxious.", "Emotional security."),
    acc("Colourful hair clips", "Cute clips for tidying hair, too big to swallow.", "Neat appearance and safety."),
    acc("Bell shoe clip", "A little bell for the shoe that helps locate a wandering child.", "Knowing where they are, and fun."),
    acc("Soft silicone bracelet", "Gentle on skin, allergy friendly.", "Prevents skin trouble."),
];

const PRESCHOOL_BASICS: &[AccessoryTemplate] = &[
    acc("Kids' watch", "Practice telling the time. Some models let parents get in touch.", "Learning time and staying safe."),
    acc("Crossbody pouch", "Children manage their own handkerchief and tissues. Hard to lose.", "Practice looking after belongings."),
    acc("Calming bracelet", "A bracelet in soothing colours.", "Emotional balance and focus."),
    acc("Friendship badge", "A cute badge that makes it easier to start conversations.", "Social development."),
    acc("Reward stickers", "Sparkly stickers for a job well done.", "Motivation."),
];

const SCHOOL_BASICS: &[AccessoryTemplate] = &[
    acc("School bag cover", "Keeps the bag dry and adds reflectors for visibility.", "Protects the school bag and improves visibility."),
    acc("Clip-on pocket", "Handy when the uniform has no pockets, for handkerchief and tissues.", "Carrying hygiene items."),
    acc("Study planner", "Manage homework and plans independently.", "Builds self-management."),
    acc("Ergonomic pencils", "Pens and pencils that support a correct grip.", "Better posture and study efficiency."),
    acc("Personal safety alarm", "Sounds a loud alarm in an emergency. Some models include GPS.", "Safety on the way to and from school."),
];

/// Basic age-appropriate accessory pool
#[must_use]
pub fn basic_accessories(age_group: AgeGroup) -> &'static [AccessoryTemplate] {
    match age_group {
        AgeGroup::Toddler => TODDLER_BASICS,
        AgeGroup::Preschool => PRESCHOOL_BASICS,
        AgeGroup::School => SCHOOL_BASICS,
    }
}

/// Extra items appended above 30 °C
pub const HEAT_SAFETY_ITEMS: &[ItemTemplate] = &[
    tmpl(Protection, "Cooling towel", "Turns cold when soaked in water. Wrap around the neck to control body heat.", "Essential against heatstroke in extreme heat."),
    tmpl(Accessories, "Ice pack pouch", "Hold against the neck or underarms to bring body heat down. Effective against heatstroke.", "Emergency cooling."),
];

/// Extra items appended below 5 °C
pub const COLD_SAFETY_ITEMS: &[ItemTemplate] = &[
    tmpl(Accessories, "Disposable hand warmers", "Non-adhesive warmers for pockets. Emergency protection against the cold.", "Keeps body heat up in severe cold."),
    tmpl(Protection, "Windproof mask", "Shields face and nose from icy wind and warms the air breathed in.", "Prevents frostbite on the face."),
];
