use super::AppTheme;

/// Nord - Arctic, north-bluish palette (default)
pub fn nord() -> AppTheme {
    AppTheme::from_hex(
        "Nord",
        0x002E_3440, // bg_base - Polar Night 0
        0x003B_4252, // bg_surface - Polar Night 1
        0x0043_4C5E, // bg_elevated - Polar Night 2
        0x004C_566A, // bg_hover - Polar Night 3
        0x00EC_EFF4, // fg_primary - Snow Storm 2
        0x00D8_DEE9, // fg_secondary - Snow Storm 1
        0x0081_8CA3, // fg_muted
        0x002E_3440, // fg_on_accent
        0x0088_C0D0, // accent - Frost 1
        0x008F_BCBB, // accent_hover - Frost 0
        0x00A3_BE8C, // success - Aurora green
        0x00EB_CB8B, // warning - Aurora yellow
        0x00BF_616A, // danger - Aurora red
        0x0081_A1C1, // info - Frost 3
        0x0043_4C5E, // border
        0x005E_81AC, // border_strong - Frost 2
    )
}

/// Gruvbox - Retro groove, warm dark
pub fn gruvbox() -> AppTheme {
    AppTheme::from_hex(
        "Gruvbox",
        0x0028_2828, // bg_base - bg0
        0x0032_302F, // bg_surface - bg0_s
        0x003C_3836, // bg_elevated - bg1
        0x0050_4945, // bg_hover - bg2
        0x00EB_DBB2, // fg_primary - fg1
        0x00D5_C4A1, // fg_secondary - fg2
        0x0092_8374, // fg_muted - gray
        0x0028_2828, // fg_on_accent
        0x00FE_8019, // accent - orange
        0x00FA_BD2F, // accent_hover - yellow
        0x00B8_BB26, // success - green
        0x00FA_BD2F, // warning - yellow
        0x00FB_4934, // danger - red
        0x0083_A598, // info - blue
        0x0050_4945, // border
        0x00D6_5D0E, // border_strong
    )
}

/// Dracula - Dark purple with vivid accents
pub fn dracula() -> AppTheme {
    AppTheme::from_hex(
        "Dracula",
        0x0028_2A36, // bg_base - background
        0x0034_3746, // bg_surface
        0x0044_475A, // bg_elevated - current line
        0x004F_5369, // bg_hover
        0x00F8_F8F2, // fg_primary - foreground
        0x00E2_E2DC, // fg_secondary
        0x0062_72A4, // fg_muted - comment
        0x0028_2A36, // fg_on_accent
        0x00BD_93F9, // accent - purple
        0x00FF_79C6, // accent_hover - pink
        0x0050_FA7B, // success - green
        0x00F1_FA8C, // warning - yellow
        0x00FF_5555, // danger - red
        0x008B_E9FD, // info - cyan
        0x0044_475A, // border
        0x00BD_93F9, // border_strong
    )
}

/// Oxide Light - Warm copper-tinted cream
pub fn oxide_light() -> AppTheme {
    AppTheme::from_hex(
        "Oxide Light",
        0x00F2_E8D8, // bg_base - Warm cream
        0x00F7_F0E5, // bg_surface - Light cream cards
        0x00FC_F8F0, // bg_elevated - Almost white
        0x00DC_CFBD, // bg_hover - Warm tan
        0x003A_2E25, // fg_primary - Deep warm brown
        0x006A_5D51, // fg_secondary - Medium brown
        0x009B_8D7F, // fg_muted - Light brown
        0x00FF_FCF8, // fg_on_accent - Cream on copper
        0x00A7_5533, // accent - Burnt copper
        0x0092_4A2E, // accent_hover - Darker copper
        0x006B_8456, // success - Sage green
        0x00BD_8838, // warning - Warm amber
        0x00AD_4433, // danger - Terracotta
        0x004D_8A7E, // info - Teal
        0x00D8_CCBA, // border
        0x00A7_5533, // border_strong
    )
}
