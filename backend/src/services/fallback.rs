//! Deterministic fallback narrative
//!
//! Used whenever the generative provider cannot produce text. Every section
//! is rendered from fixed templates and the weather snapshot, so the same
//! inputs always give byte-identical output and every section clears the
//! minimum length on its own.

use shared::{BackgroundInfo, Language, NarrativeSection, NarrativeSections, WeatherRecord};

/// Full fallback narrative for a region
pub fn fallback_narrative(
    region: &str,
    weather: &WeatherRecord,
    background: Option<&BackgroundInfo>,
    language: Language,
) -> NarrativeSections {
    let mut sections = NarrativeSections {
        building_examples: fallback_examples(region, language),
        ..Default::default()
    };
    for section in NarrativeSection::ALL {
        *sections.section_mut(section) =
            fallback_section(section, region, weather, background, language);
    }
    sections
}

/// Fallback text for a single section
pub fn fallback_section(
    section: NarrativeSection,
    region: &str,
    weather: &WeatherRecord,
    background: Option<&BackgroundInfo>,
    language: Language,
) -> String {
    match language {
        Language::Ko => korean_section(section, region, weather, background),
        Language::En => english_section(section, region, weather, background),
    }
}

/// Generic building examples parameterized by region
pub fn fallback_examples(region: &str, language: Language) -> Vec<String> {
    match language {
        Language::Ko => vec![
            format!("{region}의 전통 궁궐 건축 - 목조 가구식 구조와 높은 기단으로 위계를 드러낸 공간 구성"),
            format!("{region}의 사원 건축 - 석조 기단 위에 세운 목조 전각과 빗물을 빠르게 흘려보내는 급경사 지붕"),
            format!("{region}의 전통 민가 - 주변에서 구한 흙, 돌, 나무로 지은 실용적인 주거 구조"),
            format!("{region}의 정원 건축 - 지형과 물길을 살려 자연과 어우러지게 배치한 누정과 담장"),
            format!("{region}의 성곽 건축 - 석축과 목조 문루를 결합한 방어 시설"),
        ],
        Language::En => vec![
            format!("Palace architecture of {region} - timber post-and-beam halls raised on stone platforms"),
            format!("Temple buildings of {region} - wooden halls on masonry bases under steep, fast-draining roofs"),
            format!("Traditional houses of {region} - practical dwellings built from local earth, stone and timber"),
            format!("Garden pavilions of {region} - structures placed to follow the terrain and watercourses"),
            format!("Fortifications of {region} - stone ramparts combined with timber gate towers"),
        ],
    }
}

fn background_sentence_ko(background: Option<&BackgroundInfo>) -> String {
    match background {
        Some(info) if !info.description.is_empty() => format!(
            "\n백과사전은 이 지역을 '{}'({})(으)로 소개하고 있으며, 이러한 지리적 맥락이 지역 생태계의 바탕이 됩니다.\n",
            info.title, info.description
        ),
        Some(info) => format!(
            "\n백과사전 문서 '{}'에서 이 지역의 지리적 맥락을 더 자세히 확인할 수 있습니다.\n",
            info.title
        ),
        None => String::new(),
    }
}

fn background_sentence_en(background: Option<&BackgroundInfo>) -> String {
    match background {
        Some(info) if !info.description.is_empty() => format!(
            "\nThe encyclopedia describes the area as '{}' ({}), and that geographic setting underpins its ecosystems.\n",
            info.title, info.description
        ),
        Some(info) => format!(
            "\nThe encyclopedia article '{}' gives further geographic context for the area.\n",
            info.title
        ),
        None => String::new(),
    }
}

fn korean_section(
    section: NarrativeSection,
    region: &str,
    w: &WeatherRecord,
    background: Option<&BackgroundInfo>,
) -> String {
    match section {
        NarrativeSection::Climate => format!(
            "\n{region}의 현재 기온은 {temp:.1}°C이고 체감온도는 {feels:.1}°C입니다.\n\
오늘의 일교차는 {range:.1}°C로, 최고 {max:.1}°C와 최저 {min:.1}°C 사이에서 움직이고 있습니다.\n\n\
상대습도 {humidity}%는 현재 기온에서 공기가 품을 수 있는 최대 수증기량에 대한 실제 수증기량의 비율입니다.\n\
해면기압 {pressure} hPa는 표준기압 1013.25 hPa와 견주어 고기압과 저기압 가운데 어느 쪽의 영향을 받는지 보여 줍니다.\n\
지상 10m에서 잰 풍속 {wind:.1} km/h는 대기 순환이 얼마나 활발한지를 나타냅니다.\n\n\
이 기상 요소들은 위도, 해발고도, 바다와의 거리, 계절풍이 함께 작용한 결과이며, 오랜 기간의 관측값을 모으면 이 지역의 기후대를 판단할 수 있습니다.\n",
            temp = w.temperature,
            feels = w.apparent_temperature,
            range = w.daily_range(),
            max = w.temp_max,
            min = w.temp_min,
            humidity = w.humidity,
            pressure = w.pressure,
            wind = w.wind_speed,
        ),
        NarrativeSection::NaturalEnvironment => format!(
            "\n{region}의 자연 환경은 지형, 토양, 식생이 서로 영향을 주고받으며 만들어진 생태계입니다.\n\n\
지금 관측되는 기상 조건은 이 지역의 지형과 밀접하게 연결되어 있습니다.\n\
습도 {humidity}%는 증발산량과 강수량의 균형을 반영하며, 토양 수분과 식생 분포를 좌우합니다.\n\n\
지형은 기온의 수직 분포, 바람의 방향과 세기, 강수 분포에 큰 영향을 줍니다.\n\
해발고도가 100m 높아질 때마다 기온은 약 0.6°C씩 낮아지는데, 이를 기온 감률이라고 합니다.\n{background}",
            humidity = w.humidity,
            background = background_sentence_ko(background),
        ),
        NarrativeSection::TraditionalArchitecture => format!(
            "\n{region}의 전통 건축은 수백 년에 걸쳐 지역 기후에 맞추어 다듬어진 건축 기술의 집합입니다.\n\n\
건축 재료:\n\
- 목재: 지역에서 자라는 수종으로 기둥, 보, 서까래를 만들었습니다. 목재의 열전도율은 약 0.15-0.25 W/m·K로 낮아 단열에 유리합니다.\n\
- 석재: 가까운 채석장의 돌을 기초와 벽체에 썼습니다. 화강암은 압축강도가 100-250 MPa에 이르러 구조적으로 안정적입니다.\n\
- 흙과 점토: 벽체에 쓰이며, 흙의 흡습성은 실내 습도를 조절하는 데 효과적입니다.\n\n\
구조 체계:\n\
기둥과 보를 짜 맞춘 가구식 구조가 기본이며, 목재의 탄성을 살린 유연한 접합부가 지진의 힘을 흡수합니다.\n\
지붕 경사는 강수량에 따라 정해지며, 연강수량이 1000mm를 넘는 곳에서는 35-45°의 급경사가 흔합니다.\n\n\
현재 기온 {temp:.1}°C 같은 조건에서도 쾌적함을 유지하도록 자연 환기와 일사 조절 기법이 발달했습니다.\n",
            temp = w.temperature,
        ),
        NarrativeSection::ClimateAdaptation => format!(
            "\n열환경 제어:\n\
- 자연 환기: 실내외 온도 차에 의한 부력 환기와 바람에 의한 풍압 환기가 함께 작용합니다. 베르누이 원리에 따라 건물 바깥의 풍속이 빨라지면 압력이 낮아져 실내 공기가 밖으로 빠져나갑니다.\n\
- 단열: 목재 벽체의 열관류율(U-value)은 약 0.4-0.8 W/m²·K 수준입니다.\n\n\
습도 제어:\n\
- 목재와 흙벽은 습기를 머금었다가 내놓는 습도 완충 효과가 있어, 현재와 같은 습도 {humidity}% 환경에서도 실내 상대습도 변동을 10-20% 줄여 줍니다.\n\n\
구조 안정성:\n\
- 내진: 목재 접합부의 유연성이 지진 에너지를 흡수하며 감쇠비는 약 5-10%입니다.\n\
- 내풍: 낮은 건물 높이와 무거운 지붕이 풍속 {wind:.1} km/h 이상의 바람에도 버틸 수 있게 합니다.\n\n\
에너지 효율:\n\
- 남향 배치로 겨울에는 햇빛을 최대한 받아들이고, 여름에는 깊은 처마로 그늘을 만듭니다.\n\
- 자연 채광과 환기로 에너지 소비를 줄이는 패시브 디자인이 {region}의 전통 건축에 녹아 있습니다.\n",
            humidity = w.humidity,
            wind = w.wind_speed,
        ),
        NarrativeSection::SimpleExplanation => format!(
            "\n전문 용어 쉽게 이해하기:\n\n\
열전도율: 열이 재료를 얼마나 잘 통과하는지 나타내는 값입니다. 숫자가 작을수록 단열이 잘 됩니다. 스티로폼은 약 0.03, 나무는 약 0.15입니다.\n\n\
베르누이 원리: 공기가 빠르게 움직이는 곳은 압력이 낮아집니다. 그래서 건물 밖으로 바람이 불면 창문을 통해 실내 공기가 빠져나가며 환기가 됩니다.\n\n\
기둥-보 구조: 기둥이 세로로 무게를 받치고 보가 가로로 이어 주는 구조입니다. 조립식이라 지진에 유연하게 대응합니다.\n\n\
상대습도: 공기가 담을 수 있는 최대 수증기량 가운데 지금 담고 있는 양의 비율입니다. {region}의 지금 습도 {humidity}%는 공기가 수증기로 {humidity}% 채워졌다는 뜻입니다.\n\n\
기온 감률: 높이 올라갈수록 기온이 내려가는 비율입니다. 산을 100m 오르면 약 0.6°C 낮아집니다.\n\n\
쾨펜 기후 구분: 세계의 기후를 기온과 강수량으로 나눈 체계입니다. Cfa는 온난 습윤 기후, Dwa는 겨울이 건조한 냉대 기후를 뜻합니다.\n",
            humidity = w.humidity,
        ),
    }
}

fn english_section(
    section: NarrativeSection,
    region: &str,
    w: &WeatherRecord,
    background: Option<&BackgroundInfo>,
) -> String {
    match section {
        NarrativeSection::Climate => format!(
            "\nThe current temperature in {region} is {temp:.1}°C, with an apparent temperature of {feels:.1}°C.\n\
Today's daily range is {range:.1}°C, between a high of {max:.1}°C and a low of {min:.1}°C.\n\n\
Relative humidity of {humidity}% is the ratio of actual water vapour to the maximum the air can hold at this temperature.\n\
Sea-level pressure of {pressure} hPa, compared with the standard 1013.25 hPa, indicates whether high or low pressure dominates.\n\
The wind speed of {wind:.1} km/h, measured 10 m above ground, reflects the strength of the local circulation.\n\n\
These elements result from latitude, elevation, distance to the sea and seasonal winds acting together; long-term records of them define the region's climate zone.\n",
            temp = w.temperature,
            feels = w.apparent_temperature,
            range = w.daily_range(),
            max = w.temp_max,
            min = w.temp_min,
            humidity = w.humidity,
            pressure = w.pressure,
            wind = w.wind_speed,
        ),
        NarrativeSection::NaturalEnvironment => format!(
            "\nThe natural environment of {region} is an ecosystem shaped by the interplay of topography, soil and vegetation.\n\n\
Current weather conditions are closely tied to the local terrain.\n\
A humidity of {humidity}% reflects the balance between evapotranspiration and precipitation, which governs soil moisture and plant distribution.\n\n\
Terrain controls the vertical temperature profile, the direction and strength of winds, and where rain falls.\n\
Temperature drops by roughly 0.6°C for every 100 m of elevation gained, a relationship known as the lapse rate.\n{background}",
            humidity = w.humidity,
            background = background_sentence_en(background),
        ),
        NarrativeSection::TraditionalArchitecture => format!(
            "\nThe traditional architecture of {region} is a body of building knowledge refined over centuries to suit the local climate.\n\n\
Materials:\n\
- Timber: local species were used for posts, beams and rafters. Wood conducts little heat (about 0.15-0.25 W/m·K), which makes it a good insulator.\n\
- Stone: nearby quarries supplied foundations and walls. Granite reaches compressive strengths of 100-250 MPa.\n\
- Earth and clay: used for walls, where their hygroscopic nature moderates indoor humidity.\n\n\
Structure:\n\
Post-and-beam framing is the basic system, and flexible timber joints absorb seismic forces.\n\
Roof pitch follows rainfall; where annual precipitation exceeds 1000 mm, slopes of 35-45° are common.\n\n\
Natural ventilation and solar shading developed to keep interiors comfortable in conditions such as today's {temp:.1}°C.\n",
            temp = w.temperature,
        ),
        NarrativeSection::ClimateAdaptation => format!(
            "\nThermal control:\n\
- Natural ventilation: stack ventilation driven by indoor-outdoor temperature differences works together with wind-driven ventilation. By Bernoulli's principle, faster wind outside lowers pressure and draws indoor air out.\n\
- Insulation: timber walls reach a thermal transmittance (U-value) of roughly 0.4-0.8 W/m²·K.\n\n\
Humidity control:\n\
- Timber and earth walls buffer moisture, reducing indoor humidity swings by 10-20% even at today's {humidity}%.\n\n\
Structural resilience:\n\
- Seismic: flexible timber joints dissipate earthquake energy, with damping ratios around 5-10%.\n\
- Wind: low building heights and heavy roofs resist winds well above the current {wind:.1} km/h.\n\n\
Energy efficiency:\n\
- South-facing layouts capture winter sun while deep eaves shade summer light.\n\
- Daylighting and natural ventilation form a passive design approach embedded in the traditional buildings of {region}.\n",
            humidity = w.humidity,
            wind = w.wind_speed,
        ),
        NarrativeSection::SimpleExplanation => format!(
            "\nKey terms in plain words:\n\n\
Thermal conductivity: how easily heat passes through a material. Lower numbers insulate better. Styrofoam is about 0.03 and wood about 0.15.\n\n\
Bernoulli's principle: fast-moving air has lower pressure. When wind blows past a building, indoor air is pulled out through the windows, ventilating the rooms.\n\n\
Post-and-beam structure: posts carry weight vertically and beams connect them horizontally. Because the parts are fitted together, the frame can flex during earthquakes.\n\n\
Relative humidity: how full the air is with water vapour compared with the most it could hold. Today's {humidity}% in {region} means the air is {humidity}% full.\n\n\
Lapse rate: the rate at which air cools with height. Climbing 100 m up a mountain makes it about 0.6°C colder.\n\n\
Köppen classification: a system that groups world climates by temperature and rainfall. Cfa is humid subtropical, and Dwa is a cold climate with dry winters.\n",
            humidity = w.humidity,
        ),
    }
}
