//! Per-day almanac: a symbol emoji and a short description for each of
//! the 30 lunar days.

use luna_clock::{DAYS_IN_CYCLE, LunarDay};

/// Symbol and description for one lunar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayEntry {
    pub emoji: &'static str,
    pub description: &'static str,
}

const fn e(emoji: &'static str, description: &'static str) -> DayEntry {
    DayEntry { emoji, description }
}

#[rustfmt::skip]
static ALMANAC: [DayEntry; DAYS_IN_CYCLE as usize] = [
    e("🕯️", "Светильник. День замыслов: загадайте желание и наметьте планы на весь лунный месяц."),
    e("🌾", "Рог изобилия. Хорошее время, чтобы собирать силы и ресурсы, начинать накопления."),
    e("🐆", "Леопард. День активности и смелости, энергию стоит направить на важное дело."),
    e("🌳", "Древо познания. Подходит для учёбы и размышлений, поспешных решений лучше избегать."),
    e("🦄", "Единорог. День превращений: благоприятен для здоровья и бережного отношения к себе."),
    e("🦩", "Журавль. Время мечтать, общаться и прислушиваться к интуиции."),
    e("🌬️", "Роза ветров. Слово сегодня имеет особую силу, говорите только то, что думаете."),
    e("🔥", "Феникс. День очищения и обновления, хорошо избавляться от лишнего."),
    e("🦇", "Летучая мышь. Непростой день, лучше сохранять спокойствие и не спорить."),
    e("⛲", "Фонтан. День семьи и традиций, благоприятен для встреч с близкими."),
    e("🗡️", "Огненный меч. Пик энергии: берите на себя трудные задачи, но не перегружайтесь."),
    e("❤️", "Сердце. День милосердия и доброты, хорошо помогать другим."),
    e("🎡", "Колесо. Время учиться новому и возвращаться к отложенным делам."),
    e("📯", "Труба. День призыва: удачное время для начинаний и важных разговоров."),
    e("🐍", "Змей. День соблазнов, проявляйте сдержанность и осторожность."),
    e("🕊️", "Голубь. Спокойный и светлый день гармонии и умеренности."),
    e("🔔", "Колокол. День радости и праздника, хорош для общения и союзов."),
    e("🪞", "Зеркало. Окружающие отражают ваше состояние, присмотритесь к себе."),
    e("🕷️", "Паук. День проверки, не поддавайтесь чужому влиянию и обману."),
    e("🦅", "Орёл. День подъёма и преодоления, хорош для решительных шагов."),
    e("🐎", "Конь. Активный день движения, путешествий и творчества."),
    e("🐘", "Слон. День мудрости и знаний, полезно делиться опытом."),
    e("🐊", "Крокодил. Напористая энергия, направьте её в созидательное русло."),
    e("🐻", "Медведь. День силы и спокойствия, хорош для работы и отдыха на природе."),
    e("🐚", "Раковина. Время неспешности и созерцания, не торопите события."),
    e("🐸", "Лягушка. Меньше слов и больше тишины, избегайте суеты."),
    e("🪄", "Жезл. День интуиции и вдохновения, прислушайтесь к внутреннему голосу."),
    e("🌸", "Лотос. День гармонии и духовного раскрытия."),
    e("🐙", "Спрут. Завершение цикла, хорошо отпустить старое и отдохнуть."),
    e("🦢", "Лебедь. Короткий итоговый день, время подвести итоги и простить обиды."),
];

/// Almanac entry for `day`.
pub fn entry(day: LunarDay) -> &'static DayEntry {
    &ALMANAC[usize::from(day.get() - 1)]
}
