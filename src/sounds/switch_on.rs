use std::time::Duration;

use crate::audio::asset::SoundAsset;

/// Rising chirp played when the theme switcher turns on.
pub static SWITCH_ON: SoundAsset = SoundAsset::from_static(
    "switch-on",
    "data:audio/wav;base64,UklGRqQPAABXQVZFZm10IBAAAAABAAEAIlYAAESsAAACABAAZGF0YYAPAAAAAFIA8ADPAeACEQRNBX4GjQdlCPEIHgngCCwI/gZXBTwDuwDm/dL6mvdd9DzxV+7R68jpW+ih563njehH6tfsNfBO9Af5Qf7SA5EJTA/QFOsZrh2EIFciGSPGIl8h8R6QG1YXZxLpDAkH9gDi+vr0cO9w6iLmqOId4JXeHd643mDgB+OW5vLq9e929Un7PQEiB8cM/xGeFn8agx2QH5cgkCB7H2IdVxp0FtkRrgwdB1YBifvm9Z3w2evD533kIeLD4G/gJeHh4pLlIelv7VjysfdM/fgChwjIDY4SsRYNGoYcBx6DHvcdaRzmGYQWYhKjDXII/AJy/QH43PIu7iDq1uZt5PjihOIV46XkJeeA6pbuQ/Ne+Lj9IANpCGIN3xG5FcsY/Ro6HHgcthv6GVQX3xO4DwYL9QWyAG77V/ad8Wrt5uku51zlgeSi5MDlzue56mfus/J394b8sAHGBpkL/A/GE9QWChlUGqYa/hljGOQVmRKhDiQKSgVDAD77avb28Qruzepd6NDmNeaR5uDnFeoa7dLwGfXE+aj+lANZCMoMuxAGFIwWNRjxGLkYkReDFaUSEw/xCmcGogHS/CX4yfPq763sMuqR6NnnEug56UDrFe6a8av1IPrM/n4DCwhDDPwPEBNiFdsWaxcOF8gVpxPAEDINIQm2BB8Ajfsq9ybzqe/X7Mvqm+lT6fTpeOvO7d7wiPSl+Av9iwH4BSMK4A0KEX4TJhXuFdAVzhTyElEQBw02CQcFqABG/A74L/TQ8BXuG+z36rPqU+vP7BbvEfKe9Zf50f0fAlIGPgq4DZoQxxInFKsUTxQWExARUg76Ci0HFgPh/rz61PZU82LwHu6h7PvrMexC7SLvuvHt9Jn4k/yvAMEEmggQDPwOPhG+EmoTPBM3EmYQ3g29CiUHQAM7/0H7gPcj9FDxJe+97SXtZO147lLw3vL+9Y75ZP1UATIF0QgHDLAOrRDnEVIS6BGvELUOEwzmCFUFiQGv/fP5gfaB8xbxXO9n7kLu7e5h8IzyU/WW+C787/+uAz4HdQotDUUPphA/EQoRCRBJDuAL6wiNBfABP/6m+lH3Z/QM8lzwa+9D7+fvTfFl8xT2Ovmv/EkA3QM/B0QKygywDuAPTBDvD84O9wyCCo4HPgS9ADf91vnF9in0IvLK8DLwX/BP8fbyP/UN+Dz7pP4ZAnIFgwgmCzkNpA5UD0EPbQ7jDLYKAwjsBJoBN/7t+ub3SvU688/xHPEp8fTxdPOU9Tn4P/uB/tIBCQX8B4UKggzcDX8OZQ6QDQoM6AlGB0cEEwHV/bX63vd09ZfzYPLe8RfyCPOk9NX2fvl6/KP/zQLQBYIIwQptDHINwg1ZDT4Mfwo0CH0FfwJj/1D8c/nw9uv0ffO78q7yVfOp9JX2APnJ+8n+1QHHBHUHugl3C5UMBQ3CDM8LOQoZCIoFsQK2/8H8+/mM95X1MPRx82LzA/RL9Sj3f/ku/BH//gHNBFUHdAkMCwcMVwz4C/AKTgkqB6IE2gH8/i78mPlh96b1gfQC9C70BPV29nH41vqD/VAAGAOwBfQHwwkDC6ILmAvmCpYJvQd0Bd4CIABk/dD6iviz9mb1tvSs9Ej1gvZG+Hr6/vys/1wC5wQnB/sISAr8CgsLdwpHCY4HZgXvAk4Arf0w+/34Nffz9Un1QfXb9Q33xfjo+lf97P9+AuoECAe6COYJegpuCsMJhAjEBp4EMwKq/yj90/rQ+D33M/bA9ez1s/YJ+Nn5Bvxv/u0AXAOUBXMH3Qi7CQEKqwm+CEkHZAUsA8QAVP7/++v5OPgC91r2TPbW9vH3ivmI+8v9LgCNAsEEqAYjCBoJgAlOCYcIOQd4BWIDFgG9/nn8cPrC+Ir33PbC9j73RvjL+bL73v0qAHECjwRhBskHsQgKCdAIBQi5Bv8E9QK9AHv+U/xq+t/4yvc+90P32Pfz+IP6a/yO/sUA7gLlBIkGvgdxCJcILQg6B9AFBgT6AdD/qf2t+/r5r/jg95v35Pe1+AH6svup/cf/5QHjA5wF9AbVBzAI/gdEBw8GcwSNAnwAZv5t/LP6Vfls+Ab4KfjU+Pr5h/th/WX/cgFkAxoFdgZgB8gHqQcFB+YFYgSSApcAlP6s/P/6rPnJ+Gb4ifgw+U76z/uZ/Yz/hQFhAwAFRQYZB24HPwePBmsF5wMfAjMARf54/Oz6vPn9+L34APnB+fH6e/xE/ikACgLFAzoFTwbxBhQHtgbfBZ4ECgNAAWL/kP3s+5T6ofkj+ST5ovmV+ur7iv1V/yoB6QJwBKQFbwbCBpcG8wXgBHUDygEAADj+kvwt+yT6iflo+cL5kfrE+0b9+v6+AHQC+gM0BQoGbgZYBsoF0AR7A+UBLQB0/tn8fPt2+tr5tPkG+sr68Ptk/Qj/vABhAtcDAgXMBSYGCQZ4BX4ELgOiAfn/Uf7L/IX7l/oS+gL6Zvo2+2P81f1x/xQBogL8AwUFrAXjBaYF+wTuA5UCCwFu/939ePxa+5j6Q/pf+ur62vsc/ZX+KQC4ASQDUQQmBZMFkQUfBUgEHAOyASgAnf4u/fn7F/uY+of65Pqn+8L8Hv6e/yQBkgLLA7UEPwVeBRAFWwRNA/4BhwAH/5z9Y/x1++X6v/oE+7D7s/z6/Wn/4gBIAn4DawT7BCQF4gQ8BD4D/QGVACP/w/2T/Kv7H/v5+jz74/vf/Bz+f//rAEMCagNIBMwE6gSgBPUD9wK8AV0A+P6q/Y78vftH+zX7ivs9/D/9fP7X/zQBdwKEA0QEqQSpBEYEhwN9Aj8B5/+T/l79Y/y3+2j7ffvz+8H81P0V/2gAsgHWArsDTgSDBFUEyQPrAs0BigA9/wH+8fwm/LD7mfvk+4j8eP2f/uP/KAFTAkkD9gNLBEAE1wMZAxcC5wCm/2z+V/1+/PT7xfv1+3/8V/1q/p//2wADAv0CswMVBBsExAMZAygCCAHS/6D+j/22/Cn88/sZ/Jj8ZP1q/pT/xQDlAdgCiQPpA+8DmwP1AgsC8wDI/6H+nP3O/Ev8HfxK/Mz8mP2a/rz/4gD0AdcCdwPHA74DXgOwAsQBsACO/3b+g/3L/F/8SfyJ/Bv98P31/hAAKgEnAvECdAOmA4EDCgNLAlYBQwAs/yj+Uf26/HL8f/zf/Ir9bv53/4sAkgFyAhcDcgN5Ay0DlQLAAcEAsv+q/sT9FP2s/JT8z/xX/R/+FP8dACMBDQLEAjgDXAMvA7QC+AEMAQgABP8Z/l794/y1/Nj8Sf38/d/+3v/eAMkBhgIFAzkDHQO0AgkCKwEyADb/Tf6P/Q/92Pzw/FX9+/3T/sj/wACmAWIC4QIYAwADngL7ASYBNQBB/1/+qP0s/fj8Ef10/Rf+6f7X/8cAowFVAssC+QLcAnYC0gEAARUAKv9U/qr9PP0V/Tn9pf1M/h//BgDtALsBXAK/AtwCrgI7Ao8BvADX//b+Mf6c/UX9Nf1u/er9nP5x/1MALQHnAW8CtgK3AnAC6gEyAVwAff+s/v/9h/1R/WH9t/1I/gb/3v+3AH4BHAKCAqUCgQIcAn4BugDk/xH/V/7K/Xn9bP2j/Rr+w/6M/2AAKgHUAUwChgJ8Ai8CqAH0ACgAWP+b/gT+o/2C/aX9CP6f/lz/KADxAJ4BIAJnAmwCLwK3ARABTQCE/8f+Lf7F/Zv9sv0J/pb+SP8NANEAfgEAAksCVwIiArIBEwFYAJT/3P5E/t39sv3H/Rr+of5O/w0AygBxAe8BNgJAAgoCmwEAAUkAjP/b/kv+7P3I/eL9N/6//mr/IwDZAHcB6gEmAiYC6AF1AdkAJQBv/8j+Rf70/d39A/5i/u/+mv9PAPsAigHtARgCBwK7AT8BngDu/z//p/42/vn99/0w/p3+Mv/d/4sAKgGmAfIBBQLdAX8B9gBSAKX/A/9+/ib+BP4d/mz+6v6G/zAA1ABfAcEB8AHlAaIBMAGbAPX/Uf/B/lf+Hv4d/lT+vf5K/+z/jwAiAZIB0wHeAbEBUQHLAC0AjP/4/oP+PP4p/k7+pf4l/77/XgDyAGoBtgHPAbEBYAHmAFEAtP8g/6b+V/45/lL+nv4T/6X/PwDTAEwBngG+AakBYQHvAGEAyf83/77+bP5K/l3+o/4S/53/MwDDADsBjAGuAZsBVwHqAGEAzf9A/8r+ev5a/m3+sf4d/6X/NgDBADQBgQGfAYoBRQHYAFEAwv86/8v+gv5o/oH+yP42/7z/SQDNADgBfAGQAXMBKQG6ADQAqf8p/8T+hv54/pr+6f5a/9//ZwDjAEIBeAF/AVcBAwGPAAoAhf8P/7j+iv6L/rv+FP+K/w4AkAAAAU8BcwFoATAB0gBZANf/Wf/x/qz+kv6n/uf+S//G/0cAvwAfAVkBZwFHAf4AlAAYAJr/KP/T/qX+o/7P/iH/kP8MAIcA8AA5AVoBTgEXAbwASQDO/1n/+v69/qv+xf4H/2r/4P9ZAMcAGgFIAUsBIwHVAGwA9f+A/xz/1v63/sT++v5T/8L/OACnAP8ANgFDASYB4gCAAA4Am/81/+v+xf7J/vf+R/+w/yIAkADrACYBOQEiAeUAigAcAKz/R//6/tL+0v76/kb/qv8YAIQA3gAZAS4BGwHhAIkAHwCy/0//BP/c/tz+A/9M/63/GQCBANgAEQEkARAB1gCAABgAr/9Q/wn/5f7n/hD/Wv+6/yMAhwDYAAwBGgEBAcUAbgAIAKP/Sf8J/+z+9f4i/2//z/81AJQA3gAJAQ8B7wCuAFUA8v+Q/z7/B//0/gb/O/+L/+z/TgCmAOYABQEAAdcAkAA0ANP/d/8v/wX//v4c/1r/r/8OAGwAugDuAP8A7AC4AGoADQCv/1z/If8G/w//Ov+B/9r/NwCNAM8A8gDzANEAkQA8AOD/iP9C/xf/Dv8o/2H/sf8KAGMArgDeAO8A3QCqAGAACACv/2L/Lf8W/yH/Tf+S/+j/QACPAMkA5QDgALoAeQAmAND/f/9C/yH/If9C/37/zv8jAHQAtADZAN0AwQCJADwA6P+X/1X/Lv8l/z3/cv+8/w4AYACiAMwA2ADDAJIASgD5/6j/Zf85/yv/Pf9s/7H/AQBRAJUAwgDRAMEAlQBRAAIAtP9w/0P/Mv9A/2z/rf/7/0kAjAC5AMsAvQCTAFIABQC5/3f/Sv85/0b/cP+v//v/RgCIALQAxAC2AI0ATgADALn/ef9O/z//Tf93/7b/AABJAIcAsAC+AK4AgwBEAPz/s/93/1H/Rf9X/4P/wv8KAFEAiwCvALcAowB2ADYA7/+q/3P/Uv9M/2P/kv/T/w==",
    Some(Duration::from_millis(90)),
);
